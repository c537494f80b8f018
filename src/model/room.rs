use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    /// Price per night in the smallest currency unit.
    pub price: i64,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub name: String,
    pub price: i64,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoomDto {
    pub name: String,
    pub price: i64,
    pub capacity: i32,
}
