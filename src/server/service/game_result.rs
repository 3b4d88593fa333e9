//! Result service for business logic.
//!
//! Validates references and uniqueness before handing writes to the repository,
//! which re-ranks the affected games in the same transaction.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{game::GameRepository, game_result::GameResultRepository, team::TeamRepository},
    error::AppError,
    model::game_result::{GameResult, UpsertGameResultParams},
};

pub struct GameResultService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GameResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the score of a team in a game.
    ///
    /// # Returns
    /// - `Ok(GameResult)` - The stored result with its computed rank
    /// - `Err(AppError::BadRequest)` - Team or game does not exist
    /// - `Err(AppError::Conflict)` - The team already has a result for the game
    pub async fn create(&self, params: UpsertGameResultParams) -> Result<GameResult, AppError> {
        let result_repo = GameResultRepository::new(self.db);

        self.ensure_references(params.team_id, params.game_id)
            .await?;

        if result_repo
            .find_by_team_and_game(params.team_id, params.game_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Team already has a result for this game".to_string(),
            ));
        }

        let created = result_repo.create(params).await?;

        tracing::debug!(
            "Recorded result {} for team {} in game {}",
            created.id,
            created.team_id,
            created.game_id
        );

        Ok(created)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<GameResult, AppError> {
        GameResultRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Result not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<GameResult>, AppError> {
        let results = GameResultRepository::new(self.db).get_all().await?;
        Ok(results)
    }

    /// Replaces a result and re-ranks the games it moved between.
    ///
    /// # Returns
    /// - `Ok(())` - Result updated
    /// - `Err(AppError::NotFound)` - No result with that id
    /// - `Err(AppError::BadRequest)` - Team or game does not exist
    /// - `Err(AppError::Conflict)` - Another result exists for the (team, game) pair
    pub async fn update(&self, params: UpsertGameResultParams) -> Result<(), AppError> {
        let result_repo = GameResultRepository::new(self.db);

        let Some(id) = params.id else {
            return Err(AppError::NotFound("Result not found".to_string()));
        };
        self.get_by_id(id).await?;

        self.ensure_references(params.team_id, params.game_id)
            .await?;

        if let Some(other) = result_repo
            .find_by_team_and_game(params.team_id, params.game_id)
            .await?
        {
            if other.id != id {
                return Err(AppError::Conflict(
                    "Team already has a result for this game".to_string(),
                ));
            }
        }

        if !result_repo.update(params).await? {
            return Err(AppError::NotFound("Result not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a result and re-ranks its game.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !GameResultRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Result not found".to_string()));
        }

        Ok(())
    }

    async fn ensure_references(&self, team_id: Uuid, game_id: Uuid) -> Result<(), AppError> {
        if TeamRepository::new(self.db).get_by_id(team_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Team {} does not exist",
                team_id
            )));
        }

        if GameRepository::new(self.db).get_by_id(game_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Game {} does not exist",
                game_id
            )));
        }

        Ok(())
    }
}
