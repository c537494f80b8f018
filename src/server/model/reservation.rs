use chrono::NaiveDate;
use entity::reservation::ReservationStatus;

use crate::model::reservation::ReservationDto;
use crate::server::error::AppError;

/// Parses a status query string into the closed status enum.
///
/// # Returns
/// - `Ok(ReservationStatus)` - Recognized status value
/// - `Err(AppError::BadRequest)` - Unknown status string
pub fn parse_status(value: &str) -> Result<ReservationStatus, AppError> {
    ReservationStatus::parse(value)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown reservation status '{}'", value)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: entity.status,
        }
    }
}

/// Reservation enriched with room and hotel names for API responses.
///
/// `guest_name` is populated only for CEO-facing listings, where the hotel
/// owner needs to see who booked the room.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationWithContext {
    pub reservation: Reservation,
    pub room_name: String,
    pub hotel_name: String,
    pub guest_name: Option<String>,
}

impl ReservationWithContext {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.reservation.id,
            room_id: self.reservation.room_id,
            room_name: self.room_name,
            hotel_name: self.hotel_name,
            start_date: self.reservation.start_date,
            end_date: self.reservation.end_date,
            status: self.reservation.status.as_str().to_string(),
            guest_name: self.guest_name,
        }
    }
}

/// Parameters for booking a room.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub room_id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
