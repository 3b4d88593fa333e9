use super::*;

fn result_for(team_id: Uuid, game_id: Uuid, score: i32) -> UpsertGameResultParams {
    UpsertGameResultParams {
        id: None,
        team_id,
        game_id,
        score,
    }
}

/// Tests that inserting a result re-ranks its game.
///
/// Verifies that the stored ranks of the game match the score order as soon as
/// `create` returns, and that other games are left untouched.
///
/// Expected: the higher score holds rank 1, the other game keeps its rank
#[tokio::test]
async fn create_reranks_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;
    let first = factory::create_team(db, university.id).await?;
    let second = factory::create_team(db, university.id).await?;
    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;

    let untouched = factory::create_result(db, first.id, other_game.id, 50).await?;

    let repo = GameResultRepository::new(db);
    let trailing = repo.create(result_for(first.id, game.id, 80)).await?;
    assert_eq!(trailing.rank, 1);

    let leading = repo.create(result_for(second.id, game.id, 95)).await?;
    assert_eq!(leading.rank, 1);

    let results = repo.get_by_game(game.id).await?;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].team_id, second.id);
    assert_eq!(results[0].rank, 1);
    assert_eq!(results[1].team_id, first.id);
    assert_eq!(results[1].rank, 2);
    assert_eq!(results[1].score, 80);

    let other = repo.get_by_id(untouched.id).await?.unwrap();
    assert_eq!(other.rank, untouched.rank);

    Ok(())
}

/// Tests moving a result to another game.
///
/// Verifies that both the game it left and the game it joined are re-ranked.
///
/// Expected: Ok(true) with gapless ranks in both games
#[tokio::test]
async fn update_reranks_both_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;
    let first = factory::create_team(db, university.id).await?;
    let second = factory::create_team(db, university.id).await?;
    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;

    let repo = GameResultRepository::new(db);
    let moving = repo.create(result_for(first.id, game.id, 95)).await?;
    let staying = repo.create(result_for(second.id, game.id, 80)).await?;
    let resident = repo.create(result_for(second.id, other_game.id, 10)).await?;
    assert_eq!(repo.get_by_id(staying.id).await?.unwrap().rank, 2);

    let updated = repo
        .update(UpsertGameResultParams {
            id: Some(moving.id),
            ..result_for(first.id, other_game.id, 95)
        })
        .await?;

    assert!(updated);
    assert_eq!(repo.get_by_id(staying.id).await?.unwrap().rank, 1);
    assert_eq!(repo.get_by_id(moving.id).await?.unwrap().rank, 1);
    assert_eq!(repo.get_by_id(resident.id).await?.unwrap().rank, 2);

    Ok(())
}

/// Tests that deleting a result re-ranks the remaining results of its game.
///
/// Expected: Ok(true) then Ok(false) on a repeated delete, survivor at rank 1
#[tokio::test]
async fn delete_reranks_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoreboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;
    let first = factory::create_team(db, university.id).await?;
    let second = factory::create_team(db, university.id).await?;
    let game = factory::create_game(db).await?;

    let repo = GameResultRepository::new(db);
    let trailing = repo.create(result_for(first.id, game.id, 10)).await?;
    let leading = repo.create(result_for(second.id, game.id, 20)).await?;

    assert!(repo.delete(leading.id).await?);
    assert!(!repo.delete(leading.id).await?);
    assert_eq!(repo.get_by_id(trailing.id).await?.unwrap().rank, 1);

    Ok(())
}
