use super::*;

/// Tests creating a room in an owned hotel.
///
/// Expected: Ok
#[tokio::test]
async fn creates_room_in_owned_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;

    let service = RoomService::new(db);
    let result = service
        .create(
            ceo.id,
            CreateRoomParams {
                hotel_id: hotel.id,
                name: "Deluxe".to_string(),
                price: 150_000,
                capacity: 2,
            },
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().hotel_id, hotel.id);

    Ok(())
}

/// Tests creating a room in another owner's hotel.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_create_in_foreign_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_ceo(db).await?;
    let intruder = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, owner.id).await?;

    let service = RoomService::new(db);
    let result = service
        .create(
            intruder.id,
            CreateRoomParams {
                hotel_id: hotel.id,
                name: "Deluxe".to_string(),
                price: 150_000,
                capacity: 2,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests creating a room in a nonexistent hotel.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_create_in_nonexistent_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;

    let service = RoomService::new(db);
    let result = service
        .create(
            ceo.id,
            CreateRoomParams {
                hotel_id: 99999,
                name: "Deluxe".to_string(),
                price: 150_000,
                capacity: 2,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
