//! Result factory for creating per-game team scores.
//!
//! Inserted rows carry rank `0`; ranks are only meaningful after the server
//! recomputes them for the game.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct GameResultFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: Uuid,
    game_id: Uuid,
    score: i32,
    rank: i32,
}

impl<'a> GameResultFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, team_id: Uuid, game_id: Uuid) -> Self {
        Self {
            db,
            team_id,
            game_id,
            score: 0,
            rank: 0,
        }
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    /// Builds and inserts the result entity into the database.
    pub async fn build(self) -> Result<entity::game_result::Model, DbErr> {
        entity::game_result::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            team_id: ActiveValue::Set(self.team_id),
            game_id: ActiveValue::Set(self.game_id),
            score: ActiveValue::Set(self.score),
            rank: ActiveValue::Set(self.rank),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a result with the given score.
pub async fn create_result(
    db: &DatabaseConnection,
    team_id: Uuid,
    game_id: Uuid,
    score: i32,
) -> Result<entity::game_result::Model, DbErr> {
    GameResultFactory::new(db, team_id, game_id)
        .score(score)
        .build()
        .await
}
