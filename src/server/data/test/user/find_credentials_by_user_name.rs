use super::*;

/// Tests loading the stored hash by user name.
///
/// Expected: Ok(Some(UserCredentials)) with the stored hash
#[tokio::test]
async fn finds_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("alice")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_user_name("alice")
        .await?
        .unwrap();

    assert_eq!(credentials.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests that lookups match the exact user name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("alice")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_user_name("mallory")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}
