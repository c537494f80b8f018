//! HTTP API controllers.
//!
//! Controllers are thin axum handlers: they authenticate the request via
//! `AuthGuard`, convert DTOs to domain parameters, call a service, and
//! convert the result back to a DTO. All business rules live in the
//! service layer.

pub mod auth;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod wish;
