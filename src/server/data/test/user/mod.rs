use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod email_exists;
mod find_by_id;
mod find_credentials_by_email;
mod mobile_exists;
