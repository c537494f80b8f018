//! Domain models and operation parameter types.
//!
//! Entities are converted into these models at the data-layer boundary and
//! converted into DTOs at the controller boundary.

pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
