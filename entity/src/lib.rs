//! SeaORM entities for the lodgeboard database schema.

pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
pub mod wish;

pub mod prelude;
