//! Team domain models and parameters.

use entity::sea_orm_active_enums::TeamRole;
use uuid::Uuid;

use crate::{
    model::team::{TeamDto, TeamRequestDto, TeamRoleDto},
    server::{error::AppError, util::avatar::avatar_url_or_default},
};

/// Team together with the name of its university.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub university_id: Uuid,
    pub university_name: String,
    pub social_links: Option<String>,
    pub avatar_url: Option<String>,
}

impl Team {
    /// Converts a team entity and its university at the repository boundary.
    ///
    /// The university is always present for a stored team; an absent one only
    /// occurs for freshly built models and maps to an empty name.
    pub fn from_entity(
        entity: entity::team::Model,
        university: Option<entity::university::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            university_id: entity.university_id,
            university_name: university.map(|u| u.name).unwrap_or_default(),
            social_links: entity.social_links,
            avatar_url: entity.avatar_url,
        }
    }

    /// Converts the team to a DTO, generating an avatar URL from the name when unset.
    pub fn into_dto(self) -> TeamDto {
        let avatar_url = avatar_url_or_default(self.avatar_url, &self.name);

        TeamDto {
            id: self.id,
            name: self.name,
            description: self.description,
            university: self.university_name,
            social_links: self.social_links,
            avatar_url,
        }
    }
}

/// Parameters for inserting a team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub description: Option<String>,
    pub university_id: Uuid,
    pub social_links: Option<String>,
    pub avatar_url: Option<String>,
}

impl CreateTeamParams {
    pub fn from_dto(dto: TeamRequestDto) -> Result<Self, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Team name must not be empty".to_string()));
        }

        Ok(Self {
            name: dto.name,
            description: dto.description,
            university_id: dto.university_id,
            social_links: dto.social_links,
            avatar_url: dto.avatar_url,
        })
    }
}

/// Parameters for replacing every column of a team.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub university_id: Uuid,
    pub social_links: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateTeamParams {
    pub fn from_dto(id: Uuid, dto: TeamRequestDto) -> Result<Self, AppError> {
        let params = CreateTeamParams::from_dto(dto)?;

        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            university_id: params.university_id,
            social_links: params.social_links,
            avatar_url: params.avatar_url,
        })
    }
}

impl From<TeamRole> for TeamRoleDto {
    fn from(role: TeamRole) -> Self {
        match role {
            TeamRole::Owner => Self::Owner,
            TeamRole::Captain => Self::Captain,
            TeamRole::ViceCaptain => Self::ViceCaptain,
            TeamRole::Player => Self::Player,
            TeamRole::Guest => Self::Guest,
        }
    }
}

impl From<TeamRoleDto> for TeamRole {
    fn from(role: TeamRoleDto) -> Self {
        match role {
            TeamRoleDto::Owner => Self::Owner,
            TeamRoleDto::Captain => Self::Captain,
            TeamRoleDto::ViceCaptain => Self::ViceCaptain,
            TeamRoleDto::Player => Self::Player,
            TeamRoleDto::Guest => Self::Guest,
        }
    }
}

/// Whether members with this role may approve, reject or remove other members.
pub fn can_manage_roster(role: TeamRole) -> bool {
    matches!(
        role,
        TeamRole::Owner | TeamRole::Captain | TeamRole::ViceCaptain
    )
}
