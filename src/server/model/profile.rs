//! Profile domain models: a user's current membership and their history ledger.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TeamRole;
use uuid::Uuid;

use crate::model::user::{ProfileDto, TeamHistoryDto};

/// Current team membership of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub team_name: String,
    pub role: TeamRole,
    /// When the membership was approved.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_entity(
        entity: entity::profile::Model,
        team: Option<entity::team::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            team_id: entity.current_team_id,
            team_name: team.map(|t| t.name).unwrap_or_default(),
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// One closed membership interval.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamHistoryEntry {
    pub team_id: Uuid,
    pub team_name: String,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
    /// Only `None` for rows written outside the membership workflow.
    pub left_at: Option<DateTime<Utc>>,
}

impl TeamHistoryEntry {
    pub fn from_entity(
        entity: entity::team_history::Model,
        team: Option<entity::team::Model>,
    ) -> Self {
        Self {
            team_id: entity.team_id,
            team_name: team.map(|t| t.name).unwrap_or_default(),
            role: entity.role,
            joined_at: entity.joined_at,
            left_at: entity.left_at,
        }
    }

    pub fn into_dto(self) -> TeamHistoryDto {
        TeamHistoryDto {
            join: self.joined_at,
            left: self.left_at,
            name: self.team_name,
            role: self.role.into(),
        }
    }
}

/// Current snapshot plus the ledger ordered by `joined_at` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileWithHistory {
    pub profile: Profile,
    pub history: Vec<TeamHistoryEntry>,
}

impl ProfileWithHistory {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.profile.id,
            team_name: self.profile.team_name,
            team_role: self.profile.role.into(),
            created_at: self.profile.created_at,
            updated_at: self.profile.updated_at,
            team_history: self
                .history
                .into_iter()
                .map(TeamHistoryEntry::into_dto)
                .collect(),
        }
    }
}
