//! Business logic for CTF service definitions.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::ctf_service::CtfServiceRepository,
    error::AppError,
    model::ctf_service::{CtfService, UpsertCtfServiceParams},
};

pub struct CtfServiceService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CtfServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertCtfServiceParams) -> Result<CtfService, AppError> {
        let service = CtfServiceRepository::new(self.db).create(params).await?;

        tracing::info!("Created service {} ({})", service.name, service.id);

        Ok(service)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CtfService, AppError> {
        CtfServiceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<CtfService>, AppError> {
        let services = CtfServiceRepository::new(self.db).get_all().await?;
        Ok(services)
    }

    pub async fn update(&self, params: UpsertCtfServiceParams) -> Result<(), AppError> {
        if !CtfServiceRepository::new(self.db).update(params).await? {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !CtfServiceRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        Ok(())
    }
}
