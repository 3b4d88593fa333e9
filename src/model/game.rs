use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Where a game's window stands relative to the time of the response.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatusDto {
    Upcoming,
    Ongoing,
    Past,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct GameDto {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: Option<String>,
    pub status: GameStatusDto,
    /// Services attached to the game.
    pub service_ids: Vec<Uuid>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct GameRequestDto {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: Option<String>,
    /// Replaces the attached services when present; omitted keeps them as they are.
    #[serde(default)]
    pub service_ids: Option<Vec<Uuid>>,
}
