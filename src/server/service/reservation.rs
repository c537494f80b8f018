//! Reservation booking, detail reads, listings and cancellation.
//!
//! Detail reads are restricted to the booking user and only allowed while
//! the reservation is still pending and not past its end date. Cancellation
//! follows the same ownership rule and only applies to pending reservations.

use chrono::Utc;
use entity::reservation::ReservationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::{auth::AuthError, AppError},
    model::reservation::{CreateReservationParams, Reservation, ReservationWithContext},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room for the requesting user.
    ///
    /// The stay must start today or later and end after it starts. New
    /// reservations always begin in the PENDING state.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Created reservation
    /// - `Err(AppError::BadRequest)` - Invalid date range
    /// - `Err(AppError::NotFound)` - No room with that id
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        if params.start_date >= params.end_date {
            return Err(AppError::BadRequest(
                "Reservation must end after it starts".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        if params.start_date < today {
            return Err(AppError::BadRequest(
                "Reservation cannot start in the past".to_string(),
            ));
        }

        let room_repo = RoomRepository::new(self.db);
        if room_repo.get_by_id(params.room_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Room {} not found",
                params.room_id
            )));
        }

        let repo = ReservationRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Reads a reservation's detail for the booking user.
    ///
    /// # Returns
    /// - `Ok(ReservationWithContext)` - Pending, unexpired reservation owned
    ///   by the requesting user
    /// - `Err(AppError::NotFound)` - No reservation with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Booked by another user
    /// - `Err(AppError::BadRequest)` - Not pending, or past its end date
    pub async fn get_detail(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<ReservationWithContext, AppError> {
        let repo = ReservationRepository::new(self.db);

        let context = repo
            .get_with_context(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        if context.reservation.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("reservation {} belongs to another user", id),
            )
            .into());
        }

        if context.reservation.status != ReservationStatus::Pending {
            return Err(AppError::BadRequest(
                "Reservation is no longer pending".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        if context.reservation.end_date < today {
            return Err(AppError::BadRequest("Reservation has expired".to_string()));
        }

        Ok(context)
    }

    /// Lists the requesting user's reservations, optionally by status.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<ReservationWithContext>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_by_user(user_id, status).await?)
    }

    /// Lists reservations across a CEO's hotels, optionally by status.
    pub async fn list_for_owner(
        &self,
        owner_id: i32,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<ReservationWithContext>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_for_owner(owner_id, status).await?)
    }

    /// Cancels a pending reservation for its booking user.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation now cancelled
    /// - `Err(AppError::NotFound)` - No reservation with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Booked by another user
    /// - `Err(AppError::BadRequest)` - Not in the PENDING state
    pub async fn cancel(&self, user_id: i32, id: i32) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        let reservation = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        if reservation.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("reservation {} belongs to another user", id),
            )
            .into());
        }

        if reservation.status != ReservationStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending reservations can be cancelled".to_string(),
            ));
        }

        Ok(repo.update_status(id, ReservationStatus::Cancelled).await?)
    }
}
