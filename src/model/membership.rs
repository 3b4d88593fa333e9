use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::team::TeamRoleDto;

/// Optional body of a join request; the role defaults to `player`.
///
/// Only `player` and `guest` are accepted.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct JoinTeamDto {
    pub role: Option<TeamRoleDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct MembershipRequestDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role: TeamRoleDto,
    pub created_at: DateTime<Utc>,
}
