use super::*;

/// Tests creating a user with only required fields.
///
/// Verifies that the repository assigns an id and stores every field, with
/// optional fields left empty.
///
/// Expected: Ok(User) matching the stored row
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("alice")).await?;

    assert_eq!(user.user_name, "alice");
    assert_eq!(user.display_name, None);
    assert_eq!(user.avatar_url, None);
    assert_eq!(user.role, UserRole::Player);
    assert_eq!(user.status, "active");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_name, "alice");
    assert_eq!(stored.password_hash, "hash");

    Ok(())
}

/// Tests that optional fields survive a create and get round trip.
///
/// Expected: Ok(User) with display name and avatar preserved
#[tokio::test]
async fn round_trips_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            display_name: Some("Alice".to_string()),
            avatar_url: Some("https://cdn.example/alice.png".to_string()),
            ..create_params("alice")
        })
        .await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.display_name.as_deref(), Some("Alice"));

    Ok(())
}

/// Tests that user names are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn fails_for_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("alice")).await?;

    let result = repo.create(create_params("alice")).await;

    assert!(result.is_err());

    Ok(())
}
