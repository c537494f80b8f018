use super::*;

/// Tests paginating hotels across multiple pages.
///
/// Creates three hotels and fetches them two per page.
///
/// Expected: first page holds two hotels, second page holds one, total is 3
#[tokio::test]
async fn paginates_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    for name in ["Alpha", "Beta", "Gamma"] {
        factory::hotel::HotelFactory::new(db, ceo.id)
            .name(name)
            .build()
            .await?;
    }

    let repo = HotelRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Alpha");
    assert_eq!(first_page[1].name, "Beta");

    let (second_page, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Gamma");

    Ok(())
}

/// Tests paginating when there are no hotels.
///
/// Expected: empty page with total 0
#[tokio::test]
async fn returns_empty_page_when_no_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let (hotels, total) = repo.get_paginated(0, 10).await?;

    assert!(hotels.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that list items expose the first image as the thumbnail.
///
/// Expected: thumbnail equals the first stored image path
#[tokio::test]
async fn list_items_use_first_image_as_thumbnail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;
    factory::create_hotel(db, ceo.id).await?;

    let repo = HotelRepository::new(db);
    let (hotels, _) = repo.get_paginated(0, 10).await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].thumbnail, "/img/1.jpg");

    Ok(())
}
