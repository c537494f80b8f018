//! Hotel domain models and parameters.
//!
//! A hotel's descriptive tags are persisted as one comma-delimited string
//! column (`,tag1,tag2,`) but exposed everywhere else as a `Vec<String>`.
//! The codec lives here so the data layer and tests share one
//! implementation.

use crate::model::hotel::{
    CreateHotelDto, HotelDto, HotelListItemDto, PaginatedHotelsDto, UpdateHotelDto,
};
use crate::server::model::room::Room;

/// Parses the delimited tag column into a tag list.
///
/// Entries are trimmed and empty entries are filtered, so the leading and
/// trailing delimiters written by `tags_to_delimited` (and any doubled
/// commas) never yield empty tags.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serializes a tag list into the delimited column representation.
///
/// The stored form carries leading and trailing commas: `,tag1,tag2,`.
pub fn tags_to_delimited(tags: &[String]) -> String {
    format!(",{},", tags.join(","))
}

/// Hotel listing with owner and full image set.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub intro: String,
    pub tags: Vec<String>,
    pub postcode: String,
    pub address: String,
    pub images: Vec<String>,
    pub contact_url: Option<String>,
}

impl Hotel {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Collects the nine image columns into a list, dropping unset optional
    /// slots, and decodes the tag column.
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        let mut images = vec![
            entity.img_path1,
            entity.img_path2,
            entity.img_path3,
            entity.img_path4,
            entity.img_path5,
        ];
        for optional in [
            entity.img_path6,
            entity.img_path7,
            entity.img_path8,
            entity.img_path9,
        ]
        .into_iter()
        .flatten()
        {
            images.push(optional);
        }

        Self {
            id: entity.id,
            owner_id: entity.user_id,
            name: entity.name,
            intro: entity.intro,
            tags: parse_tag_list(&entity.info),
            postcode: entity.postcode,
            address: entity.address,
            images,
            contact_url: entity.contact_url,
        }
    }

    pub fn into_list_item(self) -> HotelListItem {
        let thumbnail = self.images.into_iter().next().unwrap_or_default();
        HotelListItem {
            id: self.id,
            name: self.name,
            intro: self.intro,
            tags: self.tags,
            address: self.address,
            thumbnail,
        }
    }
}

/// Hotel detail together with its rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.hotel.id,
            name: self.hotel.name,
            intro: self.hotel.intro,
            info: self.hotel.tags,
            postcode: self.hotel.postcode,
            address: self.hotel.address,
            images: self.hotel.images,
            contact_url: self.hotel.contact_url,
            rooms: self.rooms.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

/// Slim hotel representation for paginated listings and wishlists.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelListItem {
    pub id: i32,
    pub name: String,
    pub intro: String,
    pub tags: Vec<String>,
    pub address: String,
    pub thumbnail: String,
}

impl HotelListItem {
    pub fn into_dto(self) -> HotelListItemDto {
        HotelListItemDto {
            id: self.id,
            name: self.name,
            intro: self.intro,
            info: self.tags,
            address: self.address,
            thumbnail: self.thumbnail,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedHotels {
    pub hotels: Vec<HotelListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedHotels {
    pub fn into_dto(self) -> PaginatedHotelsDto {
        PaginatedHotelsDto {
            hotels: self.hotels.into_iter().map(|h| h.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a hotel.
#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub owner_id: i32,
    pub name: String,
    pub intro: String,
    pub tags: Vec<String>,
    pub postcode: String,
    pub address: String,
    pub images: Vec<String>,
    pub contact_url: Option<String>,
}

impl CreateHotelParams {
    /// Converts a DTO to server parameters for the requesting owner.
    pub fn from_dto(owner_id: i32, dto: CreateHotelDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            intro: dto.intro,
            tags: dto.info,
            postcode: dto.postcode,
            address: dto.address,
            images: dto.images,
            contact_url: dto.contact_url,
        }
    }
}

/// Parameters for updating a hotel.
#[derive(Debug, Clone)]
pub struct UpdateHotelParams {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub intro: String,
    pub tags: Vec<String>,
    pub postcode: String,
    pub address: String,
    pub images: Vec<String>,
    pub contact_url: Option<String>,
}

impl UpdateHotelParams {
    pub fn from_dto(id: i32, owner_id: i32, dto: UpdateHotelDto) -> Self {
        Self {
            id,
            owner_id,
            name: dto.name,
            intro: dto.intro,
            tags: dto.info,
            postcode: dto.postcode,
            address: dto.address,
            images: dto.images,
            contact_url: dto.contact_url,
        }
    }
}
