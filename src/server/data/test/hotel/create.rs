use super::*;

/// Tests creating a hotel with the minimum five images.
///
/// Verifies that the created hotel round-trips its tag list and image
/// list through the delimited column and the nine image slots.
///
/// Expected: Ok with tags and five images preserved
#[tokio::test]
async fn creates_hotel_with_five_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;

    let repo = HotelRepository::new(db);
    let result = repo.create(sample_create_params(ceo.id)).await;

    assert!(result.is_ok());
    let hotel = result.unwrap();
    assert_eq!(hotel.owner_id, ceo.id);
    assert_eq!(hotel.name, "Harbor View");
    assert_eq!(hotel.tags, vec!["ocean".to_string(), "breakfast".to_string()]);
    assert_eq!(hotel.images.len(), 5);
    assert_eq!(hotel.images[0], "/img/a.jpg");

    Ok(())
}

/// Tests creating a hotel with all nine image slots filled.
///
/// Expected: Ok with all nine images preserved in order
#[tokio::test]
async fn creates_hotel_with_nine_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;

    let mut params = sample_create_params(ceo.id);
    params.images = (1..=9).map(|i| format!("/img/{}.jpg", i)).collect();

    let repo = HotelRepository::new(db);
    let hotel = repo.create(params).await?;

    assert_eq!(hotel.images.len(), 9);
    assert_eq!(hotel.images[8], "/img/9.jpg");

    Ok(())
}

/// Tests that the stored tag column carries the delimited form.
///
/// Expected: info column stored as `,ocean,breakfast,`
#[tokio::test]
async fn stores_tags_in_delimited_form() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ceo = factory::create_ceo(db).await?;

    let repo = HotelRepository::new(db);
    let hotel = repo.create(sample_create_params(ceo.id)).await?;

    let stored = entity::prelude::Hotel::find_by_id(hotel.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.info, ",ocean,breakfast,");

    Ok(())
}
