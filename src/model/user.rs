use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::team::TeamRoleDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleDto {
    Admin,
    Player,
    Guest,
}

/// Public view of a user. The password hash never leaves the server.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserDto {
    pub id: Uuid,
    pub user_name: String,
    pub display_name: Option<String>,
    pub role: UserRoleDto,
    /// Stored avatar, or the generated `api/v1/avatar/<name>` URL when unset.
    pub avatar_url: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateUserDto {
    pub user_name: String,
    pub display_name: Option<String>,
    pub role: UserRoleDto,
    pub avatar_url: Option<String>,
    pub status: String,
    pub password: String,
}

/// Full replacement of a user. The stored password is kept when `password` is omitted.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateUserDto {
    pub user_name: String,
    pub display_name: Option<String>,
    pub role: UserRoleDto,
    pub avatar_url: Option<String>,
    pub status: String,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TeamHistoryDto {
    pub join: DateTime<Utc>,
    pub left: Option<DateTime<Utc>>,
    pub name: String,
    pub role: TeamRoleDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ProfileDto {
    pub id: Uuid,
    pub team_name: String,
    pub team_role: TeamRoleDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub team_history: Vec<TeamHistoryDto>,
}
