use super::*;

/// Tests listing teams ordered by name.
///
/// Expected: Ok(Vec<Team>) sorted alphabetically
#[tokio::test]
async fn returns_teams_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;
    for name in ["Zeta", "Alpha", "Mu"] {
        factory::team::TeamFactory::new(db, university.id)
            .name(name)
            .build()
            .await?;
    }

    let teams = TeamRepository::new(db).get_all().await?;
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);
    assert!(teams.iter().all(|t| t.university_name == university.name));

    Ok(())
}
