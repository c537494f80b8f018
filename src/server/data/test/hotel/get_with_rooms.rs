use super::*;

/// Tests getting a hotel together with its rooms.
///
/// Expected: Ok(Some(HotelWithRooms)) with rooms ordered cheapest first
#[tokio::test]
async fn gets_hotel_with_rooms_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .name("Suite")
        .price(300_000)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .name("Standard")
        .price(100_000)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let result = repo.get_with_rooms(hotel.id).await;

    assert!(result.is_ok());
    let with_rooms = result.unwrap();
    assert!(with_rooms.is_some());
    let with_rooms = with_rooms.unwrap();
    assert_eq!(with_rooms.hotel.id, hotel.id);
    assert_eq!(with_rooms.rooms.len(), 2);
    assert_eq!(with_rooms.rooms[0].name, "Standard");
    assert_eq!(with_rooms.rooms[1].name, "Suite");

    Ok(())
}

/// Tests getting a hotel that has no rooms yet.
///
/// Expected: Ok(Some(HotelWithRooms)) with an empty room list
#[tokio::test]
async fn gets_hotel_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;

    let repo = HotelRepository::new(db);
    let with_rooms = repo.get_with_rooms(hotel.id).await?;

    assert!(with_rooms.is_some());
    assert!(with_rooms.unwrap().rooms.is_empty());

    Ok(())
}

/// Tests getting a nonexistent hotel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let result = repo.get_with_rooms(99999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
