//! Team service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{team::TeamRepository, university::UniversityRepository},
    error::AppError,
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
};

pub struct TeamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team for an existing university.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team with its university name
    /// - `Err(AppError::BadRequest)` - The university does not exist
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        self.ensure_university(params.university_id).await?;

        let team = TeamRepository::new(self.db).create(params).await?;

        tracing::info!("Created team {} ({})", team.name, team.id);

        Ok(team)
    }

    /// Retrieves a team by id.
    ///
    /// # Returns
    /// - `Ok(Team)` - Team found
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;
        Ok(teams)
    }

    /// Replaces a team.
    ///
    /// # Returns
    /// - `Ok(())` - Team updated
    /// - `Err(AppError::BadRequest)` - The university does not exist
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn update(&self, params: UpdateTeamParams) -> Result<(), AppError> {
        self.ensure_university(params.university_id).await?;

        if !TeamRepository::new(self.db).update(params).await? {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a team and re-ranks the games it had results in.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::Conflict)` - The team has current members or ledger rows
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let team_repo = TeamRepository::new(self.db);

        if team_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        if team_repo.has_membership_records(id).await? {
            return Err(AppError::Conflict(
                "Team has members or membership history".to_string(),
            ));
        }

        if !team_repo.delete(id).await? {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        tracing::info!("Deleted team {}", id);

        Ok(())
    }

    async fn ensure_university(&self, university_id: Uuid) -> Result<(), AppError> {
        let university = UniversityRepository::new(self.db)
            .get_by_id(university_id)
            .await?;

        if university.is_none() {
            return Err(AppError::BadRequest(format!(
                "University {} does not exist",
                university_id
            )));
        }

        Ok(())
    }
}
