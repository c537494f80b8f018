//! Room listing and CEO-side room management.
//!
//! Every mutation resolves the room's hotel first so ownership is checked
//! against the hotel owner, not the request body.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, room::RoomRepository},
    error::{auth::AuthError, AppError},
    model::room::{CreateRoomParams, Room, UpdateRoomParams},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a hotel's rooms for public browsing.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Rooms ordered cheapest first
    /// - `Err(AppError::NotFound)` - No hotel with that id
    pub async fn get_by_hotel(&self, hotel_id: i32) -> Result<Vec<Room>, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        if hotel_repo.get_by_id(hotel_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Hotel {} not found", hotel_id)));
        }

        let repo = RoomRepository::new(self.db);

        Ok(repo.get_by_hotel_id(hotel_id).await?)
    }

    /// Creates a room in a hotel owned by the requesting CEO.
    ///
    /// # Returns
    /// - `Ok(Room)` - Created room
    /// - `Err(AppError::NotFound)` - No hotel with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Hotel belongs to another owner
    pub async fn create(&self, owner_id: i32, params: CreateRoomParams) -> Result<Room, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        let hotel = hotel_repo
            .get_by_id(params.hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", params.hotel_id)))?;

        if hotel.owner_id != owner_id {
            return Err(AuthError::AccessDenied(
                owner_id,
                format!("not the owner of hotel {}", hotel.id),
            )
            .into());
        }

        let repo = RoomRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Updates a room in a hotel owned by the requesting CEO.
    pub async fn update(&self, owner_id: i32, params: UpdateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        self.check_ownership(&repo, params.id, owner_id).await?;

        Ok(repo.update(params).await?)
    }

    /// Deletes a room in a hotel owned by the requesting CEO.
    pub async fn delete(&self, owner_id: i32, id: i32) -> Result<(), AppError> {
        let repo = RoomRepository::new(self.db);

        self.check_ownership(&repo, id, owner_id).await?;

        repo.delete(id).await?;

        Ok(())
    }

    async fn check_ownership(
        &self,
        repo: &RoomRepository<'_>,
        room_id: i32,
        owner_id: i32,
    ) -> Result<(), AppError> {
        let (_, hotel) = repo
            .get_with_hotel(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", room_id)))?;

        if hotel.owner_id != owner_id {
            return Err(AuthError::AccessDenied(
                owner_id,
                format!("not the owner of hotel {}", hotel.id),
            )
            .into());
        }

        Ok(())
    }
}
