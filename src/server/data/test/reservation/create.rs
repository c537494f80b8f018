use super::*;

/// Tests creating a reservation.
///
/// Verifies that new reservations are stored with the requested date
/// range and start in the PENDING state.
///
/// Expected: Ok with status Pending
#[tokio::test]
async fn creates_pending_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let start = today + Duration::days(3);
    let end = today + Duration::days(5);

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParams {
            room_id: room.id,
            user_id: guest.id,
            start_date: start,
            end_date: end,
        })
        .await;

    assert!(result.is_ok());
    let reservation = result.unwrap();
    assert_eq!(reservation.room_id, room.id);
    assert_eq!(reservation.user_id, guest.id);
    assert_eq!(reservation.start_date, start);
    assert_eq!(reservation.end_date, end);
    assert_eq!(reservation.status, ReservationStatus::Pending);

    Ok(())
}
