use super::*;

/// Tests deleting a room in an owned hotel.
///
/// Expected: Ok
#[tokio::test]
async fn deletes_room_in_owned_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ceo, _, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let service = RoomService::new(db);
    let result = service.delete(ceo.id, room.id).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests deleting a room in another owner's hotel.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_delete_by_non_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let intruder = factory::create_ceo(db).await?;

    let service = RoomService::new(db);
    let result = service.delete(intruder.id, room.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests deleting a nonexistent room.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_delete_of_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;

    let service = RoomService::new(db);
    let result = service.delete(ceo.id, 99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
