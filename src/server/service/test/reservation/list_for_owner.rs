use super::*;

/// Tests listing reservations across a CEO's hotels.
///
/// Expected: Ok with guest names resolved
#[tokio::test]
async fn lists_reservations_with_guest_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, guest, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let reservations = service.list_for_owner(owner.id, None).await.unwrap();

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].reservation.id, reservation.id);
    assert_eq!(
        reservations[0].guest_name.as_deref(),
        Some(guest.name.as_str())
    );

    Ok(())
}

/// Tests that another owner's reservations are not listed.
///
/// Expected: Ok with empty list for an owner without bookings
#[tokio::test]
async fn excludes_other_owners_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_owner = factory::create_ceo(db).await?;

    let service = ReservationService::new(db);
    let reservations = service.list_for_owner(other_owner.id, None).await.unwrap();

    assert!(reservations.is_empty());

    Ok(())
}
