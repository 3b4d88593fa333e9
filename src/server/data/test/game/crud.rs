use super::*;

/// Tests creating and replacing a game.
///
/// Expected: Ok(true) with the new window and description stored
#[tokio::test]
async fn creates_and_updates_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now();
    let repo = GameRepository::new(db);
    let game = repo
        .create(UpsertGameParams {
            id: None,
            start_time: start,
            end_time: start + Duration::hours(8),
            description: None,
            service_ids: None,
        })
        .await?;

    let updated = repo
        .update(UpsertGameParams {
            id: Some(game.id),
            start_time: start,
            end_time: start + Duration::hours(12),
            description: Some("Finals".to_string()),
            service_ids: None,
        })
        .await?;

    assert!(updated);

    let fetched = repo.get_by_id(game.id).await?.unwrap();
    assert_eq!(fetched.end_time - fetched.start_time, Duration::hours(12));
    assert_eq!(fetched.description.as_deref(), Some("Finals"));

    Ok(())
}

/// Tests listing games by start time.
///
/// Expected: Ok(Vec<Game>) earliest first
#[tokio::test]
async fn lists_games_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later = factory::game::GameFactory::new(db)
        .start_time(now + Duration::days(2))
        .end_time(now + Duration::days(3))
        .build()
        .await?;
    let sooner = factory::game::GameFactory::new(db)
        .start_time(now)
        .end_time(now + Duration::days(1))
        .build()
        .await?;

    let games = GameRepository::new(db).get_all().await?;
    let ids: Vec<Uuid> = games.iter().map(|g| g.id).collect();

    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}

/// Tests deleting a game that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_deleting_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GameRepository::new(db).delete(Uuid::new_v4()).await?);

    Ok(())
}
