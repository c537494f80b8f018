//! Data access layer.
//!
//! One repository per aggregate. Repositories hold a reference to the
//! database connection, run SeaORM queries, and convert entity models into
//! domain models at this boundary.

pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
pub mod wish;

#[cfg(test)]
mod test;
