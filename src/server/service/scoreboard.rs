//! Per-game scoreboard aggregation.
//!
//! Ranking is a pure function over the results of one game: higher score first,
//! ties broken by the smaller team id, ranks numbered from 1 without gaps. Stored
//! ranks are rewritten by every result write, see `data::game_result`.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{game::GameRepository, game_result::GameResultRepository},
    error::AppError,
    model::game_result::{rank_standings, Scoreboard},
};

pub struct ScoreboardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ScoreboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the ranked scoreboard of a game.
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - Standings ordered by rank (empty when no results exist)
    /// - `Err(AppError::NotFound)` - The game does not exist
    pub async fn get_scoreboard(&self, game_id: Uuid) -> Result<Scoreboard, AppError> {
        if GameRepository::new(self.db).get_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let standings = GameResultRepository::new(self.db)
            .get_standings(game_id)
            .await?;

        Ok(Scoreboard {
            game_id,
            standings: rank_standings(standings),
        })
    }
}
