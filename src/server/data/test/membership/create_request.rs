use super::*;

/// Tests recording a join request.
///
/// Expected: Ok(MembershipRequest) listed for the team
#[tokio::test]
async fn creates_request_listed_for_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;

    let repo = MembershipRepository::new(db);
    let request = repo
        .create_request(JoinTeamParams {
            user_id: user.id,
            team_id: team.id,
            role: TeamRole::Captain,
        })
        .await?;

    assert_eq!(request.role, TeamRole::Captain);

    let pending = repo.get_requests_for_team(team.id).await?;
    assert_eq!(pending, vec![request]);

    Ok(())
}

/// Tests rejecting a request by deleting it.
///
/// Expected: Ok(true) then Ok(false) once the request is gone
#[tokio::test]
async fn deletes_request_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    factory::create_membership_request(db, user.id, team.id).await?;

    let repo = MembershipRepository::new(db);

    assert!(repo.delete_request(user.id, team.id).await?);
    assert!(repo.find_request(user.id, team.id).await?.is_none());
    assert!(!repo.delete_request(user.id, team.id).await?);

    Ok(())
}
