//! Result and scoreboard domain models.

use uuid::Uuid;

use crate::model::game_result::{ResultDto, ResultRequestDto, ScoreboardDto, StandingDto};

/// Score of one team in one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub id: Uuid,
    pub team_id: Uuid,
    pub game_id: Uuid,
    pub score: i32,
    /// Derived from the scores of the game; never authoritative on its own.
    pub rank: i32,
}

impl GameResult {
    pub fn from_entity(entity: entity::game_result::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            game_id: entity.game_id,
            score: entity.score,
            rank: entity.rank,
        }
    }

    pub fn into_dto(self) -> ResultDto {
        ResultDto {
            id: self.id,
            team_id: self.team_id,
            game_id: self.game_id,
            score: self.score,
            rank: self.rank,
        }
    }
}

/// Parameters for recording (`id: None`) or replacing a result.
#[derive(Debug, Clone)]
pub struct UpsertGameResultParams {
    pub id: Option<Uuid>,
    pub team_id: Uuid,
    pub game_id: Uuid,
    pub score: i32,
}

impl UpsertGameResultParams {
    pub fn from_dto(id: Option<Uuid>, dto: ResultRequestDto) -> Self {
        Self {
            id,
            team_id: dto.team_id,
            game_id: dto.game_id,
            score: dto.score,
        }
    }
}

/// One scoreboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub team_id: Uuid,
    pub team_name: String,
    pub score: i32,
    pub rank: i32,
}

impl Standing {
    /// Builds a row from a stored result and its team.
    pub fn from_entity(
        result: entity::game_result::Model,
        team: Option<entity::team::Model>,
    ) -> Self {
        Self {
            team_id: result.team_id,
            team_name: team.map(|t| t.name).unwrap_or_default(),
            score: result.score,
            rank: result.rank,
        }
    }

    pub fn into_dto(self) -> StandingDto {
        StandingDto {
            team_id: self.team_id,
            team_name: self.team_name,
            score: self.score,
            rank: self.rank,
        }
    }
}

/// Orders standings and assigns their ranks.
///
/// Sorts by score descending, then by team id ascending, and sets each rank to
/// its 1-based position.
pub fn rank_standings(mut standings: Vec<Standing>) -> Vec<Standing> {
    standings.sort_by(|a, b| b.score.cmp(&a.score).then(a.team_id.cmp(&b.team_id)));

    for (position, standing) in standings.iter_mut().enumerate() {
        standing.rank = position as i32 + 1;
    }

    standings
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub game_id: Uuid,
    pub standings: Vec<Standing>,
}

impl Scoreboard {
    pub fn into_dto(self) -> ScoreboardDto {
        ScoreboardDto {
            game_id: self.game_id,
            standings: self.standings.into_iter().map(Standing::into_dto).collect(),
        }
    }
}
