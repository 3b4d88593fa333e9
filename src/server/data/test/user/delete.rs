use super::*;

/// Tests deleting a user who is a member of a team.
///
/// Verifies that the user row, their profile and their pending requests are all
/// removed by one call.
///
/// Expected: Ok(true) and no remaining rows for the user
#[tokio::test]
async fn deletes_user_with_membership_and_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, _profile) = factory::helpers::create_member_with_team(db).await?;
    let (_, other_team) = factory::helpers::create_team_with_university(db).await?;
    factory::create_membership_request(db, user.id, other_team.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(user.id).await?.is_none());

    let profiles = entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(profiles, 0);

    let requests = entity::prelude::MembershipRequest::find()
        .filter(entity::membership_request::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(requests, 0);

    Ok(())
}

/// Tests that other users are untouched by a deletion.
///
/// Expected: Ok(true) with the other member's profile still present
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _) = factory::helpers::create_member_with_team(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_profile(db, other.id, team.id).await?;

    UserRepository::new(db).delete(user.id).await?;

    let remaining = entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests that a failed deletion rolls back every statement.
///
/// A ledger row restricts deletion of its user, so the final statement fails
/// after the profile was already deleted inside the transaction.
///
/// Expected: Err(DbErr) with both the user and the profile still present
#[tokio::test]
async fn rolls_back_when_user_has_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _) = factory::helpers::create_member_with_team(db).await?;
    factory::create_history_entry(db, user.id, team.id).await?;

    let repo = UserRepository::new(db);
    let result = repo.delete(user.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(user.id).await?.is_some());

    let profiles = entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(profiles, 1);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}
