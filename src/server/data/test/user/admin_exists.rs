use super::*;

/// Tests that players alone do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests detection of an admin account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}
