use super::*;

/// Tests adding a hotel to the wishlist.
///
/// Expected: Ok, and the hotel appears in the listing
#[tokio::test]
async fn adds_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;
    let guest = factory::create_user(db).await?;

    let service = WishService::new(db);
    service.add(guest.id, hotel.id).await.unwrap();

    let hotels = service.list(guest.id).await.unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, hotel.id);

    Ok(())
}

/// Tests adding the same hotel twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let hotel = factory::create_hotel(db, ceo.id).await?;
    let guest = factory::create_user(db).await?;

    let service = WishService::new(db);
    service.add(guest.id, hotel.id).await.unwrap();
    let result = service.add(guest.id, hotel.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests wishing for a nonexistent hotel.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_nonexistent_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;

    let service = WishService::new(db);
    let result = service.add(guest.id, 99999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
