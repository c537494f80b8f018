use super::*;

/// Tests finding a user together with their stored password hash.
///
/// Expected: Ok(Some((User, hash))) with the hash written at creation
#[tokio::test]
async fn finds_user_with_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("login@example.com")
        .password_hash("$argon2id$stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("login@example.com").await;

    assert!(result.is_ok());
    let found = result.unwrap();
    assert!(found.is_some());
    let (user, hash) = found.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(hash, "$argon2id$stored-hash");

    Ok(())
}

/// Tests looking up credentials for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@example.com").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
