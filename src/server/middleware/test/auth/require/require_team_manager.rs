use super::*;

/// Tests that a captain may manage their own team.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_captain_of_team() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    factory::profile::ProfileFactory::new(db, user.id, team.id)
        .role(TeamRole::Captain)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TeamManager(team.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a plain player may not manage their team.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_player() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    factory::profile::ProfileFactory::new(db, user.id, team.id)
        .role(TeamRole::Player)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TeamManager(team.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a captain of one team may not manage another.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_captain_of_other_team() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let (_, own_team) = factory::helpers::create_team_with_university(db).await?;
    let (_, other_team) = factory::helpers::create_team_with_university(db).await?;
    factory::profile::ProfileFactory::new(db, user.id, own_team.id)
        .role(TeamRole::Owner)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TeamManager(other_team.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
