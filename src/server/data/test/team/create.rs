use super::*;

/// Tests creating a team under an existing university.
///
/// Verifies that the returned team carries the university name resolved from the
/// foreign key.
///
/// Expected: Ok(Team) with `university_name` set
#[tokio::test]
async fn creates_team_with_university_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::UniversityFactory::new(db)
        .name("Polytechnic")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Red Team".to_string(),
            description: Some("Attack first".to_string()),
            university_id: university.id,
            social_links: None,
            avatar_url: None,
        })
        .await?;

    assert_eq!(team.name, "Red Team");
    assert_eq!(team.university_name, "Polytechnic");

    let fetched = repo.get_by_id(team.id).await?.unwrap();
    assert_eq!(fetched, team);

    Ok(())
}

/// Tests that a team cannot reference an unknown university.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_university() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db)
        .create(CreateTeamParams {
            name: "Orphans".to_string(),
            description: None,
            university_id: Uuid::new_v4(),
            social_links: None,
            avatar_url: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
