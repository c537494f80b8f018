//! Hotel browsing and CEO-side hotel management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::{auth::AuthError, AppError},
    model::hotel::{
        CreateHotelParams, Hotel, HotelListItem, HotelWithRooms, PaginatedHotels,
        UpdateHotelParams,
    },
};

/// Hotels carry five mandatory and up to four optional images.
const MIN_IMAGES: usize = 5;
const MAX_IMAGES: usize = 9;

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of hotels for public browsing.
    ///
    /// # Returns
    /// - `Ok(PaginatedHotels)` - Requested page with the total counts
    /// - `Err(AppError::BadRequest)` - Zero page size
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedHotels, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "Page size must be at least 1".to_string(),
            ));
        }

        let repo = HotelRepository::new(self.db);

        let (hotels, total) = repo.get_paginated(page, per_page).await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedHotels {
            hotels,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a hotel's public detail page with its rooms.
    ///
    /// # Returns
    /// - `Ok(HotelWithRooms)` - Hotel found
    /// - `Err(AppError::NotFound)` - No hotel with that id
    pub async fn get_by_id(&self, id: i32) -> Result<HotelWithRooms, AppError> {
        let repo = HotelRepository::new(self.db);

        repo.get_with_rooms(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", id)))
    }

    /// Lists the hotels owned by a CEO.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<HotelListItem>, AppError> {
        let repo = HotelRepository::new(self.db);

        Ok(repo.get_by_owner(owner_id).await?)
    }

    /// Creates a hotel for the requesting CEO.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Created hotel
    /// - `Err(AppError::BadRequest)` - Image count outside 5 to 9
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        validate_images(&params.images)?;

        let repo = HotelRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Updates a hotel owned by the requesting CEO.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Updated hotel
    /// - `Err(AppError::NotFound)` - No hotel with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Hotel belongs to another owner
    /// - `Err(AppError::BadRequest)` - Image count outside 5 to 9
    pub async fn update(&self, params: UpdateHotelParams) -> Result<Hotel, AppError> {
        validate_images(&params.images)?;

        let repo = HotelRepository::new(self.db);

        self.check_ownership(&repo, params.id, params.owner_id).await?;

        Ok(repo.update(params).await?)
    }

    /// Deletes a hotel owned by the requesting CEO.
    ///
    /// # Returns
    /// - `Ok(())` - Hotel deleted
    /// - `Err(AppError::NotFound)` - No hotel with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Hotel belongs to another owner
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = HotelRepository::new(self.db);

        self.check_ownership(&repo, id, owner_id).await?;

        repo.delete(id).await?;

        Ok(())
    }

    /// Distinguishes a missing hotel from one owned by someone else.
    async fn check_ownership(
        &self,
        repo: &HotelRepository<'_>,
        id: i32,
        owner_id: i32,
    ) -> Result<(), AppError> {
        let hotel = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", id)))?;

        if hotel.owner_id != owner_id {
            return Err(
                AuthError::AccessDenied(owner_id, format!("not the owner of hotel {}", id)).into(),
            );
        }

        Ok(())
    }
}

fn validate_images(images: &[String]) -> Result<(), AppError> {
    if images.len() < MIN_IMAGES || images.len() > MAX_IMAGES {
        return Err(AppError::BadRequest(format!(
            "A hotel needs between {} and {} images, got {}",
            MIN_IMAGES,
            MAX_IMAGES,
            images.len()
        )));
    }
    Ok(())
}
