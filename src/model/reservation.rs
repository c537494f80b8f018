use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub room_name: String,
    pub hotel_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Lifecycle status: "PENDING", "CANCELLED" or "COMPLETED".
    pub status: String,
    /// Name of the booking user. Populated for CEO listings only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response body for a successful booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationCreatedDto {
    pub id: i32,
}
