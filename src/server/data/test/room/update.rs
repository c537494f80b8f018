use super::*;

/// Tests updating a room's fields.
///
/// Expected: Ok with new name, price and capacity persisted
#[tokio::test]
async fn updates_room_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(UpdateRoomParams {
            id: room.id,
            name: "Renovated Double".to_string(),
            price: 220_000,
            capacity: 3,
        })
        .await?;

    assert_eq!(updated.id, room.id);
    assert_eq!(updated.name, "Renovated Double");
    assert_eq!(updated.price, 220_000);
    assert_eq!(updated.capacity, 3);

    Ok(())
}

/// Tests updating a nonexistent room.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let result = repo
        .update(UpdateRoomParams {
            id: 99999,
            name: "Ghost".to_string(),
            price: 0,
            capacity: 1,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
