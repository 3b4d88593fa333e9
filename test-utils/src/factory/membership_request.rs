//! Membership request factory for creating pending join requests.

use chrono::Utc;
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct MembershipRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    team_id: Uuid,
    role: TeamRole,
}

impl<'a> MembershipRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, team_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            team_id,
            role: TeamRole::Player,
        }
    }

    pub fn role(mut self, role: TeamRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the pending request into the database.
    pub async fn build(self) -> Result<entity::membership_request::Model, DbErr> {
        entity::membership_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            team_id: ActiveValue::Set(self.team_id),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending `player` request of the user for the team.
pub async fn create_membership_request(
    db: &DatabaseConnection,
    user_id: Uuid,
    team_id: Uuid,
) -> Result<entity::membership_request::Model, DbErr> {
    MembershipRequestFactory::new(db, user_id, team_id)
        .build()
        .await
}
