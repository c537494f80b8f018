//! Reservation factory for creating test reservation entities.

use chrono::{Duration, NaiveDate, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
/// use entity::reservation::ReservationStatus;
///
/// let reservation = ReservationFactory::new(&db, room.id, guest.id)
///     .status(ReservationStatus::Cancelled)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    user_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ReservationStatus,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - start_date: 7 days from today
    /// - end_date: 9 days from today
    /// - status: `ReservationStatus::Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `room_id` - Room being reserved
    /// - `user_id` - User making the reservation
    pub fn new(db: &'a DatabaseConnection, room_id: i32, user_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            room_id,
            user_id,
            start_date: today + Duration::days(7),
            end_date: today + Duration::days(9),
            status: ReservationStatus::Pending,
        }
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Inserts the reservation into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING reservation with a future date range.
pub async fn create_reservation(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, room_id, user_id).build().await
}
