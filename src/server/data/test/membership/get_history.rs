use super::*;

/// Tests ledger ordering.
///
/// Verifies that entries come back ordered by join time regardless of the
/// order they were written in.
///
/// Expected: Ok(Vec<TeamHistoryEntry>) oldest first
#[tokio::test]
async fn orders_entries_by_join_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let university = factory::create_university(db).await?;
    let recent = factory::create_team(db, university.id).await?;
    let oldest = factory::create_team(db, university.id).await?;
    let middle = factory::create_team(db, university.id).await?;
    let now = Utc::now();

    for (team_id, days_ago) in [(recent.id, 10), (oldest.id, 300), (middle.id, 100)] {
        factory::team_history::TeamHistoryFactory::new(db, user.id, team_id)
            .joined_at(now - Duration::days(days_ago))
            .left_at(Some(now - Duration::days(days_ago - 5)))
            .build()
            .await?;
    }

    let history = MembershipRepository::new(db).get_history(user.id).await?;
    let teams: Vec<Uuid> = history.iter().map(|h| h.team_id).collect();

    assert_eq!(teams, vec![oldest.id, middle.id, recent.id]);

    Ok(())
}

/// Tests that the ledger is scoped to one user.
///
/// Expected: Ok(empty Vec) for a user with no entries
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _) = factory::helpers::create_member_with_team(db).await?;
    factory::create_history_entry(db, user.id, team.id).await?;
    let other = factory::create_user(db).await?;

    let history = MembershipRepository::new(db).get_history(other.id).await?;

    assert!(history.is_empty());

    Ok(())
}
