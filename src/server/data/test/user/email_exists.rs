use super::*;

/// Tests that a registered email is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("registered@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_exists("registered@example.com").await?);

    Ok(())
}

/// Tests that an unregistered email is reported as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unregistered_email_as_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.email_exists("free@example.com").await?);

    Ok(())
}
