//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and shortcuts for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns such as user names distinct across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team together with the university it belongs to.
///
/// # Returns
/// - `Ok((university, team))` - Both inserted entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_university(
    db: &DatabaseConnection,
) -> Result<(entity::university::Model, entity::team::Model), DbErr> {
    let university = crate::factory::university::create_university(db).await?;
    let team = crate::factory::team::create_team(db, university.id).await?;

    Ok((university, team))
}

/// Creates a user who is currently an active member of a new team.
///
/// Inserts a university, a team, a user and the profile linking them with the
/// `player` role.
///
/// # Returns
/// - `Ok((user, team, profile))` - The member, their team and current membership
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_team(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::profile::Model,
    ),
    DbErr,
> {
    let (_, team) = create_team_with_university(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::profile::create_profile(db, user.id, team.id).await?;

    Ok((user, team, profile))
}
