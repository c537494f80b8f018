use super::*;

/// Tests the ownership check for the actual owner.
///
/// Expected: Ok(true)
#[tokio::test]
async fn confirms_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;

    let repo = HotelRepository::new(db);
    assert!(repo.exists_with_owner(hotel.id, ceo.id).await?);

    Ok(())
}

/// Tests the ownership check for a different user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rejects_non_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let other = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;

    let repo = HotelRepository::new(db);
    assert!(!repo.exists_with_owner(hotel.id, other.id).await?);

    Ok(())
}

/// Tests the ownership check for a nonexistent hotel.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rejects_nonexistent_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;

    let repo = HotelRepository::new(db);
    assert!(!repo.exists_with_owner(99999, ceo.id).await?);

    Ok(())
}
