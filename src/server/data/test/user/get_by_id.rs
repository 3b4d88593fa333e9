use super::*;

/// Tests getting an existing user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn gets_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("bob")
        .build()
        .await?;

    let result = UserRepository::new(db).get_by_id(user.id).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().user_name, "bob");

    Ok(())
}

/// Tests getting a user that does not exist.
///
/// Verifies that absence is reported as `None` rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
