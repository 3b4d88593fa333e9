//! University service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::university::UniversityRepository,
    error::AppError,
    model::university::{University, UpsertUniversityParams},
};

pub struct UniversityService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UniversityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertUniversityParams) -> Result<University, AppError> {
        let university = UniversityRepository::new(self.db).create(params).await?;
        Ok(university)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<University, AppError> {
        UniversityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("University not found".to_string()))
    }

    /// Lists universities, searching by name when a non-blank term is given.
    ///
    /// Both variants return at most ten universities ordered by name.
    ///
    /// # Arguments
    /// - `term` - Optional case-insensitive substring of the name
    pub async fn list(&self, term: Option<&str>) -> Result<Vec<University>, AppError> {
        let university_repo = UniversityRepository::new(self.db);

        let universities = match term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => university_repo.search(term).await?,
            None => university_repo.get_all().await?,
        };

        Ok(universities)
    }

    /// Renames a university.
    ///
    /// # Returns
    /// - `Ok(())` - University updated
    /// - `Err(AppError::NotFound)` - No university with that id
    pub async fn update(&self, params: UpsertUniversityParams) -> Result<(), AppError> {
        if !UniversityRepository::new(self.db).update(params).await? {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a university. Teams still referencing it surface as a conflict.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !UniversityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        Ok(())
    }
}
