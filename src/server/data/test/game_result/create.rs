use super::*;

/// Tests recording a result for a team in a game.
///
/// Verifies that the returned row already carries its rank within the game.
///
/// Expected: Ok(GameResult) with rank 1 as the only result of the game
#[tokio::test]
async fn creates_ranked_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    let game = factory::create_game(db).await?;

    let repo = GameResultRepository::new(db);
    let result = repo
        .create(UpsertGameResultParams {
            id: None,
            team_id: team.id,
            game_id: game.id,
            score: 80,
        })
        .await?;

    assert_eq!(result.score, 80);
    assert_eq!(result.rank, 1);
    assert_eq!(
        repo.find_by_team_and_game(team.id, game.id).await?,
        Some(result)
    );

    Ok(())
}

/// Tests updating a result that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn update_returns_false_for_missing_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    let game = factory::create_game(db).await?;

    let updated = GameResultRepository::new(db)
        .update(UpsertGameResultParams {
            id: Some(Uuid::new_v4()),
            team_id: team.id,
            game_id: game.id,
            score: 1,
        })
        .await?;

    assert!(!updated);

    Ok(())
}
