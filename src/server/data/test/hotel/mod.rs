use crate::server::{
    data::hotel::HotelRepository,
    model::hotel::{CreateHotelParams, UpdateHotelParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_with_owner;
mod get_paginated;
mod get_with_rooms;

/// Builds create parameters with five images and two tags for an owner.
fn sample_create_params(owner_id: i32) -> CreateHotelParams {
    CreateHotelParams {
        owner_id,
        name: "Harbor View".to_string(),
        intro: "Rooms over the bay".to_string(),
        tags: vec!["ocean".to_string(), "breakfast".to_string()],
        postcode: "04524".to_string(),
        address: "1 Harbor Road".to_string(),
        images: vec![
            "/img/a.jpg".to_string(),
            "/img/b.jpg".to_string(),
            "/img/c.jpg".to_string(),
            "/img/d.jpg".to_string(),
            "/img/e.jpg".to_string(),
        ],
        contact_url: None,
    }
}
