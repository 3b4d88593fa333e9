use super::*;

/// Tests deleting a team.
///
/// Expected: Ok(true) then Ok(false) on a repeated delete
#[tokio::test]
async fn deletes_team_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = factory::helpers::create_team_with_university(db).await?;

    let repo = TeamRepository::new(db);

    assert!(repo.delete(team.id).await?);
    assert!(repo.get_by_id(team.id).await?.is_none());
    assert!(!repo.delete(team.id).await?);

    Ok(())
}

/// Tests deleting a team that appears in a user's ledger.
///
/// Verifies that the foreign key restricts the delete and that the ledger and the
/// team survive the rollback.
///
/// Expected: Err(DbErr) with the history entry and the team still stored
#[tokio::test]
async fn keeps_history_when_team_has_ledger_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    factory::create_history_entry(db, user.id, team.id).await?;

    let repo = TeamRepository::new(db);
    assert!(repo.has_membership_records(team.id).await?);

    let result = repo.delete(team.id).await;

    assert!(result.is_err());
    assert!(repo.get_by_id(team.id).await?.is_some());
    let history = entity::prelude::TeamHistory::find()
        .filter(entity::team_history::Column::TeamId.eq(team.id))
        .count(db)
        .await?;
    assert_eq!(history, 1);

    Ok(())
}

/// Tests deleting a team with a current member.
///
/// Expected: Err(DbErr) with the member's profile still stored
#[tokio::test]
async fn keeps_profile_when_team_has_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, team) = factory::helpers::create_team_with_university(db).await?;
    factory::create_profile(db, user.id, team.id).await?;

    let repo = TeamRepository::new(db);
    assert!(repo.has_membership_records(team.id).await?);

    assert!(repo.delete(team.id).await.is_err());
    assert!(entity::prelude::Profile::find()
        .filter(entity::profile::Column::UserId.eq(user.id))
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that deleting a team re-ranks the games it had results in.
///
/// With T1 at 80 and T2 at 95, removing T2 leaves T1 alone at the top.
///
/// Expected: Ok(true), T2's result removed and T1's stored rank 1
#[tokio::test]
async fn reranks_games_of_deleted_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;
    let t1 = factory::create_team(db, university.id).await?;
    let t2 = factory::create_team(db, university.id).await?;
    let game = factory::create_game(db).await?;

    let kept = factory::game_result::GameResultFactory::new(db, t1.id, game.id)
        .score(80)
        .rank(2)
        .build()
        .await?;
    factory::game_result::GameResultFactory::new(db, t2.id, game.id)
        .score(95)
        .rank(1)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    assert!(!repo.has_membership_records(t2.id).await?);
    assert!(repo.delete(t2.id).await?);

    let results = GameResultRepository::new(db).get_by_game(game.id).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, kept.id);
    assert_eq!(results[0].rank, 1);

    Ok(())
}
