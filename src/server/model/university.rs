//! University domain model and parameters.

use uuid::Uuid;

use crate::{
    model::university::{UniversityDto, UniversityRequestDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct University {
    pub id: Uuid,
    pub name: String,
}

impl University {
    pub fn from_entity(entity: entity::university::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> UniversityDto {
        UniversityDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertUniversityParams {
    /// `None` when creating.
    pub id: Option<Uuid>,
    pub name: String,
}

impl UpsertUniversityParams {
    pub fn from_dto(id: Option<Uuid>, dto: UniversityRequestDto) -> Result<Self, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "University name must not be empty".to_string(),
            ));
        }

        Ok(Self { id, name: dto.name })
    }
}
