use super::*;

/// Tests deleting a room.
///
/// Expected: Ok, and the room is no longer found
#[tokio::test]
async fn deletes_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let repo = RoomRepository::new(db);
    repo.delete(room.id).await?;

    assert!(repo.get_by_id(room.id).await?.is_none());

    Ok(())
}
