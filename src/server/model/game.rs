//! Game domain model and parameters.
//!
//! A game is a competition window; parameters reject windows that end before they
//! start. Its status is derived from the window at read time and never stored.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::game::{GameDto, GameRequestDto, GameStatusDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Upcoming,
    Ongoing,
    Past,
}

impl From<GameStatus> for GameStatusDto {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Upcoming => GameStatusDto::Upcoming,
            GameStatus::Ongoing => GameStatusDto::Ongoing,
            GameStatus::Past => GameStatusDto::Past,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: Option<String>,
    /// Attached services, sorted by id.
    pub service_ids: Vec<Uuid>,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model, service_ids: Vec<Uuid>) -> Self {
        Self {
            id: entity.id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            description: entity.description,
            service_ids,
        }
    }

    /// Status of the game at `now`. Both window bounds are inclusive.
    pub fn status_at(&self, now: DateTime<Utc>) -> GameStatus {
        if now < self.start_time {
            GameStatus::Upcoming
        } else if now <= self.end_time {
            GameStatus::Ongoing
        } else {
            GameStatus::Past
        }
    }

    pub fn into_dto(self) -> GameDto {
        let status = self.status_at(Utc::now()).into();

        GameDto {
            id: self.id,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            status,
            service_ids: self.service_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertGameParams {
    /// `None` when creating.
    pub id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: Option<String>,
    /// `None` leaves attached services untouched; duplicates are removed.
    pub service_ids: Option<Vec<Uuid>>,
}

impl UpsertGameParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `end_time` precedes `start_time`
    pub fn from_dto(id: Option<Uuid>, dto: GameRequestDto) -> Result<Self, AppError> {
        if dto.end_time < dto.start_time {
            return Err(AppError::BadRequest(
                "Game end_time must not precede start_time".to_string(),
            ));
        }

        let service_ids = dto.service_ids.map(|mut ids| {
            ids.sort();
            ids.dedup();
            ids
        });

        Ok(Self {
            id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            description: dto.description,
            service_ids,
        })
    }
}
