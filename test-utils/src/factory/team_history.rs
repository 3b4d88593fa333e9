//! Team history factory for seeding closed membership intervals.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct TeamHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    team_id: Uuid,
    role: TeamRole,
    joined_at: DateTime<Utc>,
    left_at: Option<DateTime<Utc>>,
}

impl<'a> TeamHistoryFactory<'a> {
    /// Creates a new TeamHistoryFactory for a `player` interval that started a
    /// day ago and ended now.
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, team_id: Uuid) -> Self {
        let left_at = Utc::now();
        Self {
            db,
            user_id,
            team_id,
            role: TeamRole::Player,
            joined_at: left_at - Duration::days(1),
            left_at: Some(left_at),
        }
    }

    pub fn role(mut self, role: TeamRole) -> Self {
        self.role = role;
        self
    }

    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    pub fn left_at(mut self, left_at: Option<DateTime<Utc>>) -> Self {
        self.left_at = left_at;
        self
    }

    /// Builds and inserts the ledger row into the database.
    pub async fn build(self) -> Result<entity::team_history::Model, DbErr> {
        entity::team_history::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            team_id: ActiveValue::Set(self.team_id),
            role: ActiveValue::Set(self.role),
            joined_at: ActiveValue::Set(self.joined_at),
            left_at: ActiveValue::Set(self.left_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a closed ledger entry for the user in the team.
pub async fn create_history_entry(
    db: &DatabaseConnection,
    user_id: Uuid,
    team_id: Uuid,
) -> Result<entity::team_history::Model, DbErr> {
    TeamHistoryFactory::new(db, user_id, team_id).build().await
}
