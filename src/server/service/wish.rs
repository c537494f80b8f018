//! Wishlist management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, wish::WishRepository},
    error::AppError,
    model::hotel::HotelListItem,
};

pub struct WishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the hotels on a user's wishlist, most recently added first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<HotelListItem>, AppError> {
        let repo = WishRepository::new(self.db);

        Ok(repo.get_hotels_for_user(user_id).await?)
    }

    /// Adds a hotel to a user's wishlist.
    ///
    /// # Returns
    /// - `Ok(())` - Hotel added
    /// - `Err(AppError::NotFound)` - No hotel with that id
    /// - `Err(AppError::Conflict)` - Hotel already on the wishlist
    pub async fn add(&self, user_id: i32, hotel_id: i32) -> Result<(), AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        if hotel_repo.get_by_id(hotel_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Hotel {} not found", hotel_id)));
        }

        let repo = WishRepository::new(self.db);

        if repo.exists(user_id, hotel_id).await? {
            return Err(AppError::Conflict(
                "Hotel is already on the wishlist".to_string(),
            ));
        }

        repo.add(user_id, hotel_id).await?;

        Ok(())
    }

    /// Removes a hotel from a user's wishlist.
    ///
    /// # Returns
    /// - `Ok(())` - Hotel removed
    /// - `Err(AppError::NotFound)` - Hotel was not on the wishlist
    pub async fn remove(&self, user_id: i32, hotel_id: i32) -> Result<(), AppError> {
        let repo = WishRepository::new(self.db);

        if !repo.exists(user_id, hotel_id).await? {
            return Err(AppError::NotFound(
                "Hotel is not on the wishlist".to_string(),
            ));
        }

        repo.remove(user_id, hotel_id).await?;

        Ok(())
    }
}
