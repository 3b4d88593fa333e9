use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ResultDto {
    pub id: Uuid,
    pub team_id: Uuid,
    pub game_id: Uuid,
    pub score: i32,
    pub rank: i32,
}

/// Body for recording or replacing a team's score. Rank is derived server-side.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ResultRequestDto {
    pub team_id: Uuid,
    pub game_id: Uuid,
    pub score: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct StandingDto {
    pub team_id: Uuid,
    pub team_name: String,
    pub score: i32,
    pub rank: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ScoreboardDto {
    pub game_id: Uuid,
    pub standings: Vec<StandingDto>,
}
