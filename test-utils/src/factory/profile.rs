//! Profile factory for creating current team memberships.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    team_id: Uuid,
    role: TeamRole,
    created_at: DateTime<Utc>,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory for a `player` membership starting now.
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, team_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            team_id,
            role: TeamRole::Player,
            created_at: Utc::now(),
        }
    }

    pub fn role(mut self, role: TeamRole) -> Self {
        self.role = role;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the profile entity into the database.
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            current_team_id: ActiveValue::Set(self.team_id),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Makes the user a `player` of the team.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    team_id: Uuid,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, user_id, team_id).build().await
}
