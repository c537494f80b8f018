use super::*;

/// Tests listing all of a user's reservations.
///
/// Expected: Ok with every status included when no filter is given
#[tokio::test]
async fn lists_all_statuses_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_reservation(db, room.id, guest.id).await?;
    factory::reservation::ReservationFactory::new(db, room.id, guest.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let service = ReservationService::new(db);
    let reservations = service.list_for_user(guest.id, None).await.unwrap();

    assert_eq!(reservations.len(), 2);

    Ok(())
}

/// Tests filtering a user's reservations by status.
///
/// Expected: Ok with only pending reservations
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
    let pending = factory::create_reservation(db, room.id, guest.id).await?;
    factory::reservation::ReservationFactory::new(db, room.id, guest.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let service = ReservationService::new(db);
    let reservations = service
        .list_for_user(guest.id, Some(ReservationStatus::Pending))
        .await
        .unwrap();

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].reservation.id, pending.id);

    Ok(())
}
