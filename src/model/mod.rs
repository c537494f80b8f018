//! API data transfer objects.
//!
//! These types define the JSON request and response bodies of the REST API.
//! Domain models are converted to and from these DTOs at the controller
//! boundary.

pub mod api;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
