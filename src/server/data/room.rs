//! Room data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::hotel::Hotel;
use crate::server::model::room::{CreateRoomParams, Room, UpdateRoomParams};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room in a hotel.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            capacity: ActiveValue::Set(params.capacity),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Gets a room by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets a room together with the hotel it belongs to.
    ///
    /// Used for ownership checks where the caller needs the hotel's owner
    /// without a second query.
    pub async fn get_with_hotel(&self, id: i32) -> Result<Option<(Room, Hotel)>, DbErr> {
        let result = entity::prelude::Room::find_by_id(id)
            .find_also_related(entity::prelude::Hotel)
            .one(self.db)
            .await?;

        // The hotel side of the relation is mandatory, so a missing hotel
        // only happens for a dangling row and is treated as not found.
        Ok(result.and_then(|(room, hotel)| {
            hotel.map(|h| (Room::from_entity(room), Hotel::from_entity(h)))
        }))
    }

    /// Gets all rooms of a hotel, cheapest first.
    pub async fn get_by_hotel_id(&self, hotel_id: i32) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Price)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    /// Updates a room's name, price and capacity.
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::prelude::Room::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::room::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.price = ActiveValue::Set(params.price);
        active_model.capacity = ActiveValue::Set(params.capacity);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Room::from_entity(entity))
    }

    /// Deletes a room. Reservations are removed by the cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
