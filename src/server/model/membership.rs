//! Membership request domain model.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TeamRole;
use uuid::Uuid;

use crate::{
    model::membership::{JoinTeamDto, MembershipRequestDto},
    server::{error::AppError, model::profile::Profile},
};

/// A pending request of a user to join a team.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    /// Role granted once the request is approved.
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
}

impl MembershipRequest {
    pub fn from_entity(entity: entity::membership_request::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            team_id: entity.team_id,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MembershipRequestDto {
        MembershipRequestDto {
            id: self.id,
            user_id: self.user_id,
            team_id: self.team_id,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JoinTeamParams {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role: TeamRole,
}

impl JoinTeamParams {
    /// Builds join parameters, defaulting the requested role to `player`.
    ///
    /// Only `player` and `guest` can be requested. Approval grants the requested
    /// role unchanged, so leadership roles are never handed out through a request.
    pub fn from_dto(user_id: Uuid, team_id: Uuid, dto: JoinTeamDto) -> Result<Self, AppError> {
        let role = dto.role.map(TeamRole::from).unwrap_or(TeamRole::Player);

        if !matches!(role, TeamRole::Player | TeamRole::Guest) {
            return Err(AppError::BadRequest(
                "Join requests may only ask for the player or guest role".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            team_id,
            role,
        })
    }
}

/// Outcome of approving a pending request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApprovalOutcome {
    /// The request was turned into the user's current membership.
    Approved(Profile),
    /// No pending request exists for the (user, team) pair.
    RequestNotFound,
    /// The user is already an active member of the team.
    AlreadyMember,
}
