use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamRoleDto {
    Owner,
    Captain,
    ViceCaptain,
    Player,
    Guest,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Name of the university the team represents.
    pub university: String,
    pub social_links: Option<String>,
    pub avatar_url: String,
}

/// Body for creating or fully replacing a team.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct TeamRequestDto {
    pub name: String,
    pub description: Option<String>,
    pub university_id: Uuid,
    pub social_links: Option<String>,
    pub avatar_url: Option<String>,
}
