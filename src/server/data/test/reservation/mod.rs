use crate::server::{
    data::reservation::ReservationRepository, model::reservation::CreateReservationParams,
};
use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user;
