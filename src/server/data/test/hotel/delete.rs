use super::*;

/// Tests deleting a hotel.
///
/// Expected: Ok, and the hotel is no longer found
#[tokio::test]
async fn deletes_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;

    let repo = HotelRepository::new(db);
    repo.delete(hotel.id).await?;

    assert!(repo.get_by_id(hotel.id).await?.is_none());

    Ok(())
}

/// Tests deleting a nonexistent hotel.
///
/// Deleting by id is idempotent at the data layer; the service layer
/// decides whether a missing hotel is an error.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_nonexistent_hotel_is_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let result = repo.delete(99999).await;

    assert!(result.is_ok());

    Ok(())
}
