use crate::model::room::{CreateRoomDto, RoomDto, UpdateRoomDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub price: i64,
    pub capacity: i32,
}

impl Room {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            price: entity.price,
            capacity: entity.capacity,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            hotel_id: self.hotel_id,
            name: self.name,
            price: self.price,
            capacity: self.capacity,
        }
    }
}

/// Parameters for creating a room in a hotel.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub hotel_id: i32,
    pub name: String,
    pub price: i64,
    pub capacity: i32,
}

impl CreateRoomParams {
    pub fn from_dto(hotel_id: i32, dto: CreateRoomDto) -> Self {
        Self {
            hotel_id,
            name: dto.name,
            price: dto.price,
            capacity: dto.capacity,
        }
    }
}

/// Parameters for updating a room.
#[derive(Debug, Clone)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub capacity: i32,
}

impl UpdateRoomParams {
    pub fn from_dto(id: i32, dto: UpdateRoomDto) -> Self {
        Self {
            id,
            name: dto.name,
            price: dto.price,
            capacity: dto.capacity,
        }
    }
}
