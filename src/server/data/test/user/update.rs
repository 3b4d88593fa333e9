use super::*;

fn update_params(id: Uuid, user_name: &str) -> UpdateUserParams {
    UpdateUserParams {
        id,
        user_name: user_name.to_string(),
        display_name: Some("Renamed".to_string()),
        avatar_url: None,
        role: UserRole::Guest,
        status: "banned".to_string(),
        password_hash: None,
    }
}

/// Tests replacing every column of a user.
///
/// Verifies that the update is a full replace and that an absent password keeps
/// the stored hash.
///
/// Expected: Ok(true) and the new values persisted
#[tokio::test]
async fn replaces_user_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("alice")
        .avatar_url("https://cdn.example/alice.png")
        .password_hash("original-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.update(update_params(user.id, "alice2")).await?;

    assert!(updated);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_name, "alice2");
    assert_eq!(stored.display_name.as_deref(), Some("Renamed"));
    assert_eq!(stored.avatar_url, None);
    assert_eq!(stored.role, UserRole::Guest);
    assert_eq!(stored.status, "banned");
    assert_eq!(stored.password_hash, "original-hash");

    Ok(())
}

/// Tests that a new password hash is written when provided.
///
/// Expected: Ok(true) and the stored hash replaced
#[tokio::test]
async fn replaces_password_hash_when_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserRepository::new(db)
        .update(UpdateUserParams {
            password_hash: Some("new-hash".to_string()),
            ..update_params(user.id, &user.user_name)
        })
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests that applying the same update twice yields the same row.
///
/// Expected: Ok(true) both times with identical stored state
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.update(update_params(user.id, "same")).await?);
    let first = repo.get_by_id(user.id).await?;
    assert!(repo.update(update_params(user.id, "same")).await?);
    let second = repo.get_by_id(user.id).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update(update_params(Uuid::new_v4(), "ghost"))
        .await?;

    assert!(!updated);

    Ok(())
}
