use super::*;

/// Tests listing hotels with a valid page size.
///
/// Expected: Ok with ceiling-rounded page count
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

    let service = HotelService::new(db);
    let page = service.get_paginated(0, 2).await.unwrap();

    assert_eq!(page.hotels.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);

    Ok(())
}

/// Tests listing hotels with a zero page size.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_zero_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HotelService::new(db);
    let result = service.get_paginated(0, 0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
