use super::*;

/// Tests that a registered mobile number is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_registered_mobile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .mobile("010-7777-8888")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.mobile_exists("010-7777-8888").await?);

    Ok(())
}

/// Tests that an unregistered mobile number is reported as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unregistered_mobile_as_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.mobile_exists("010-1111-2222").await?);

    Ok(())
}
