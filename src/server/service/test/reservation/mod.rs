use crate::server::{
    error::{auth::AuthError, AppError},
    model::reservation::CreateReservationParams,
    service::reservation::ReservationService,
};
use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_for_owner;
mod list_for_user;
