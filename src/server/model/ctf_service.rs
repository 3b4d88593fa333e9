//! Domain model for services, the target systems teams attack and defend.

use uuid::Uuid;

use crate::{
    model::service::{ServiceDto, ServiceRequestDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CtfService {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
}

impl CtfService {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            author: entity.author,
            logo_url: entity.logo_url,
            description: entity.description,
            is_public: entity.is_public,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            name: self.name,
            author: self.author,
            logo_url: self.logo_url,
            description: self.description,
            is_public: self.is_public,
        }
    }
}

/// Parameters for creating (`id: None`) or fully replacing a service.
#[derive(Debug, Clone)]
pub struct UpsertCtfServiceParams {
    pub id: Option<Uuid>,
    pub name: String,
    pub author: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
}

impl UpsertCtfServiceParams {
    pub fn from_dto(id: Option<Uuid>, dto: ServiceRequestDto) -> Result<Self, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Service name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            name: dto.name,
            author: dto.author,
            logo_url: dto.logo_url,
            description: dto.description,
            is_public: dto.is_public,
        })
    }
}
