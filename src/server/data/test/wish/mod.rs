use crate::server::data::wish::WishRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_hotels_for_user;
