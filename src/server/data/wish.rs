//! Wishlist data repository.
//!
//! A wish is keyed by (user, hotel), so adding the same hotel twice fails
//! on the primary key and surfaces as a conflict in the service layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{Hotel, HotelListItem};

pub struct WishRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a hotel to a user's wishlist.
    pub async fn add(&self, user_id: i32, hotel_id: i32) -> Result<(), DbErr> {
        entity::wish::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            hotel_id: ActiveValue::Set(hotel_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a hotel from a user's wishlist.
    pub async fn remove(&self, user_id: i32, hotel_id: i32) -> Result<(), DbErr> {
        entity::prelude::Wish::delete_by_id((user_id, hotel_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a hotel is on a user's wishlist.
    pub async fn exists(&self, user_id: i32, hotel_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Wish::find_by_id((user_id, hotel_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the hotels on a user's wishlist, most recently wished first.
    pub async fn get_hotels_for_user(&self, user_id: i32) -> Result<Vec<HotelListItem>, DbErr> {
        let wishes = entity::prelude::Wish::find()
            .filter(entity::wish::Column::UserId.eq(user_id))
            .order_by_desc(entity::wish::Column::CreatedAt)
            .all(self.db)
            .await?;
        if wishes.is_empty() {
            return Ok(Vec::new());
        }

        let hotel_ids: Vec<i32> = wishes.iter().map(|w| w.hotel_id).collect();
        let mut hotels: std::collections::HashMap<i32, entity::hotel::Model> =
            entity::prelude::Hotel::find()
                .filter(entity::hotel::Column::Id.is_in(hotel_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|h| (h.id, h))
                .collect();

        // Preserve the wishlist ordering rather than the lookup order.
        Ok(wishes
            .into_iter()
            .filter_map(|w| hotels.remove(&w.hotel_id))
            .map(|h| Hotel::from_entity(h).into_list_item())
            .collect())
    }
}
