use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::room::RoomDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub intro: String,
    /// Descriptive tags, stored server-side as one delimited string.
    pub info: Vec<String>,
    pub postcode: String,
    pub address: String,
    /// Between five and nine image paths.
    pub images: Vec<String>,
    pub contact_url: Option<String>,
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HotelListItemDto {
    pub id: i32,
    pub name: String,
    pub intro: String,
    pub info: Vec<String>,
    pub address: String,
    /// First image path, used as the listing thumbnail.
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedHotelsDto {
    pub hotels: Vec<HotelListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateHotelDto {
    pub name: String,
    pub intro: String,
    #[serde(default)]
    pub info: Vec<String>,
    pub postcode: String,
    pub address: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub contact_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateHotelDto {
    pub name: String,
    pub intro: String,
    #[serde(default)]
    pub info: Vec<String>,
    pub postcode: String,
    pub address: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub contact_url: Option<String>,
}
