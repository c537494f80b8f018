use super::*;

/// Tests listing a user's reservations.
///
/// Two guests hold reservations; only the requested guest's come back,
/// newest first, without guest names.
///
/// Expected: Ok with only the guest's reservations
#[tokio::test]
async fn lists_only_reservations_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_reservation(db, room.id, guest.id).await?;
    let second = factory::create_reservation(db, room.id, guest.id).await?;
    factory::create_reservation(db, room.id, other.id).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_user(guest.id, None).await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].reservation.id, second.id);
    assert_eq!(reservations[1].reservation.id, first.id);
    assert!(reservations[0].guest_name.is_none());

    Ok(())
}

/// Tests filtering a user's reservations by status.
///
/// Expected: Ok with only reservations in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::create_user(db).await?;

    factory::create_reservation(db, room.id, guest.id).await?;
    let cancelled = factory::reservation::ReservationFactory::new(db, room.id, guest.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo
        .get_by_user(guest.id, Some(ReservationStatus::Cancelled))
        .await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].reservation.id, cancelled.id);
    assert_eq!(
        reservations[0].reservation.status,
        ReservationStatus::Cancelled
    );

    Ok(())
}

/// Tests listing for a user without reservations.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_for_user_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_by_user(guest.id, None).await?;

    assert!(reservations.is_empty());

    Ok(())
}
