//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    price: i64,
    capacity: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"` where id is auto-incremented
    /// - price: `100_000`
    /// - capacity: `2`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hotel_id` - Hotel this room belongs to
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: format!("Room {}", id),
            price: 100_000,
            capacity: 2,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Inserts the room into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            capacity: ActiveValue::Set(self.capacity),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
