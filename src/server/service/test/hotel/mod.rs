use crate::server::{
    error::{auth::AuthError, AppError},
    model::hotel::{CreateHotelParams, UpdateHotelParams},
    service::hotel::HotelService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;

fn sample_create_params(owner_id: i32, image_count: usize) -> CreateHotelParams {
    CreateHotelParams {
        owner_id,
        name: "Harbor View".to_string(),
        intro: "Rooms over the bay".to_string(),
        tags: vec!["ocean".to_string()],
        postcode: "04524".to_string(),
        address: "1 Harbor Road".to_string(),
        images: (1..=image_count).map(|i| format!("/img/{}.jpg", i)).collect(),
        contact_url: None,
    }
}
