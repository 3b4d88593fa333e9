//! Game service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        ctf_service::CtfServiceRepository, game::GameRepository,
        game_service::GameServiceRepository,
    },
    error::AppError,
    model::{
        ctf_service::CtfService,
        game::{Game, UpsertGameParams},
    },
};

pub struct GameService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game. The time window is validated when the params are built.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with its attached services
    /// - `Err(AppError::BadRequest)` - A listed service does not exist
    pub async fn create(&self, params: UpsertGameParams) -> Result<Game, AppError> {
        self.ensure_services(params.service_ids.as_deref()).await?;

        let game = GameRepository::new(self.db).create(params).await?;

        tracing::info!("Created game {} starting {}", game.id, game.start_time);

        Ok(game)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        let games = GameRepository::new(self.db).get_all().await?;
        Ok(games)
    }

    /// Replaces a game, and its attached services when the params list them.
    ///
    /// # Returns
    /// - `Ok(())` - Game updated
    /// - `Err(AppError::BadRequest)` - A listed service does not exist
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn update(&self, params: UpsertGameParams) -> Result<(), AppError> {
        self.ensure_services(params.service_ids.as_deref()).await?;

        if !GameRepository::new(self.db).update(params).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a game and, through the cascade, its results and service links.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !GameRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        Ok(())
    }

    /// Gets the services attached to a game, ordered by name.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn get_services(&self, game_id: Uuid) -> Result<Vec<CtfService>, AppError> {
        self.get_by_id(game_id).await?;

        let services = GameServiceRepository::new(self.db)
            .get_services(game_id)
            .await?;

        Ok(services)
    }

    /// Attaches a service to a game.
    ///
    /// # Returns
    /// - `Ok(())` - Service attached
    /// - `Err(AppError::NotFound)` - Game or service does not exist
    /// - `Err(AppError::Conflict)` - The service is already attached
    pub async fn add_service(&self, game_id: Uuid, service_id: Uuid) -> Result<(), AppError> {
        self.get_by_id(game_id).await?;

        if CtfServiceRepository::new(self.db)
            .get_by_id(service_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        if !GameServiceRepository::new(self.db)
            .link(game_id, service_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Service is already attached to this game".to_string(),
            ));
        }

        tracing::info!("Attached service {} to game {}", service_id, game_id);

        Ok(())
    }

    /// Detaches a service from a game.
    ///
    /// # Returns
    /// - `Ok(())` - Service detached
    /// - `Err(AppError::NotFound)` - The service is not attached to the game
    pub async fn remove_service(&self, game_id: Uuid, service_id: Uuid) -> Result<(), AppError> {
        if !GameServiceRepository::new(self.db)
            .unlink(game_id, service_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Service is not attached to this game".to_string(),
            ));
        }

        Ok(())
    }

    async fn ensure_services(&self, service_ids: Option<&[Uuid]>) -> Result<(), AppError> {
        let service_repo = CtfServiceRepository::new(self.db);

        for service_id in service_ids.unwrap_or_default() {
            if service_repo.get_by_id(*service_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Service {} does not exist",
                    service_id
                )));
            }
        }

        Ok(())
    }
}
