use super::*;

/// Tests loading the standings of a single game.
///
/// Verifies that each standing carries its team name and that results of other
/// games are excluded.
///
/// Expected: Ok(Vec<Standing>) with one entry per team in the game
#[tokio::test]
async fn returns_standings_for_game_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;
    let red = factory::team::TeamFactory::new(db, university.id)
        .name("Red")
        .build()
        .await?;
    let blue = factory::team::TeamFactory::new(db, university.id)
        .name("Blue")
        .build()
        .await?;
    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;

    factory::create_result(db, red.id, game.id, 80).await?;
    factory::create_result(db, blue.id, game.id, 95).await?;
    factory::create_result(db, red.id, other_game.id, 5).await?;

    let mut standings = GameResultRepository::new(db).get_standings(game.id).await?;
    standings.sort_by(|a, b| a.team_name.cmp(&b.team_name));

    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].team_name, "Blue");
    assert_eq!(standings[0].score, 95);
    assert_eq!(standings[1].team_name, "Red");
    assert_eq!(standings[1].score, 80);

    Ok(())
}

/// Tests standings of a game without results.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_game_without_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let standings = GameResultRepository::new(db).get_standings(game.id).await?;

    assert!(standings.is_empty());

    Ok(())
}
