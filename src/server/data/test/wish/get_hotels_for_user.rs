use super::*;

/// Tests listing a user's wished hotels.
///
/// Expected: Ok with only the user's wished hotels
#[tokio::test]
async fn lists_wished_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    let wished = factory::create_hotel(db, ceo.id).await?;
    factory::create_hotel(db, ceo.id).await?;
    let guest = factory::create_user(db).await?;

    let repo = WishRepository::new(db);
    repo.add(guest.id, wished.id).await?;

    let hotels = repo.get_hotels_for_user(guest.id).await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, wished.id);
    assert_eq!(hotels[0].name, wished.name);

    Ok(())
}

/// Tests listing for a user without wishes.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_wishes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;

    let repo = WishRepository::new(db);
    let hotels = repo.get_hotels_for_user(guest.id).await?;

    assert!(hotels.is_empty());

    Ok(())
}
