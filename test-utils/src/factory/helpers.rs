//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// field values to prevent collisions with unique columns in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room together with its owning CEO and hotel.
///
/// This is a convenience method that creates:
/// 1. CEO user (hotel owner)
/// 2. Hotel
/// 3. Room
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((ceo, hotel, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let ceo = crate::factory::user::create_ceo(db).await?;
    let hotel = crate::factory::hotel::create_hotel(db, ceo.id).await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;

    Ok((ceo, hotel, room))
}

/// Creates a reservation with its full dependency chain.
///
/// Creates a CEO, hotel, room, a guest user, and a PENDING reservation by
/// that guest for the room. Useful for reservation listing and detail-read
/// tests that need a complete context.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((ceo, hotel, room, guest, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
        entity::user::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (ceo, hotel, room) = create_room_with_dependencies(db).await?;
    let guest = crate::factory::user::create_user(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, room.id, guest.id).await?;

    Ok((ceo, hotel, room, guest, reservation))
}
