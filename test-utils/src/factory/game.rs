//! Game factory for creating test competition windows.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    description: Option<String>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory for an eight hour game starting now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let start_time = Utc::now();
        Self {
            db,
            start_time,
            end_time: start_time + Duration::hours(8),
            description: None,
        }
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
