use super::*;

/// Tests a user acting on their own account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_self() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a user acting on someone else's account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin acting on another account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}
