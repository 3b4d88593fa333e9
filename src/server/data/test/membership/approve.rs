use super::*;

/// Tests approving the request of a user without a team.
///
/// Verifies that a profile with the requested role is created, the request is
/// consumed and no ledger row is written.
///
/// Expected: Ok(ApprovalOutcome::Approved(Profile))
#[tokio::test]
async fn approves_request_of_teamless_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    factory::membership_request::MembershipRequestFactory::new(db, user.id, team.id)
        .role(TeamRole::ViceCaptain)
        .build()
        .await?;

    let repo = MembershipRepository::new(db);
    let outcome = repo.approve(user.id, team.id).await?;

    let ApprovalOutcome::Approved(profile) = outcome else {
        panic!("expected approval, got {outcome:?}");
    };
    assert_eq!(profile.team_id, team.id);
    assert_eq!(profile.team_name, team.name);
    assert_eq!(profile.role, TeamRole::ViceCaptain);

    assert!(repo.find_request(user.id, team.id).await?.is_none());
    assert!(repo.get_history(user.id).await?.is_empty());

    Ok(())
}

/// Tests approving a move from one team to another.
///
/// Verifies that the old membership is closed into the ledger so the user holds
/// exactly one current team.
///
/// Expected: Ok(Approved) with one ledger entry for the old team
#[tokio::test]
async fn moves_member_between_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, old_team, _) = factory::helpers::create_member_with_team(db).await?;
    let (_, new_team) = factory::helpers::create_team_with_university(db).await?;
    factory::create_membership_request(db, user.id, new_team.id).await?;

    let repo = MembershipRepository::new(db);
    let outcome = repo.approve(user.id, new_team.id).await?;

    assert!(matches!(outcome, ApprovalOutcome::Approved(_)));

    let profiles = entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(profiles, 1);
    assert_eq!(repo.get_profile(user.id).await?.unwrap().team_id, new_team.id);

    let history = repo.get_history(user.id).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].team_id, old_team.id);
    assert!(history[0].left_at.is_some());

    Ok(())
}

/// Tests approving without a pending request.
///
/// Expected: Ok(ApprovalOutcome::RequestNotFound) and no profile
#[tokio::test]
async fn reports_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;

    let repo = MembershipRepository::new(db);
    let outcome = repo.approve(user.id, team.id).await?;

    assert_eq!(outcome, ApprovalOutcome::RequestNotFound);
    assert!(repo.get_profile(user.id).await?.is_none());

    Ok(())
}

/// Tests approving a request for the team the user is already in.
///
/// Expected: Ok(ApprovalOutcome::AlreadyMember) with the request kept
#[tokio::test]
async fn reports_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _) = factory::helpers::create_member_with_team(db).await?;
    factory::create_membership_request(db, user.id, team.id).await?;

    let repo = MembershipRepository::new(db);
    let outcome = repo.approve(user.id, team.id).await?;

    assert_eq!(outcome, ApprovalOutcome::AlreadyMember);
    assert!(repo.find_request(user.id, team.id).await?.is_some());
    assert!(repo.get_history(user.id).await?.is_empty());

    Ok(())
}
