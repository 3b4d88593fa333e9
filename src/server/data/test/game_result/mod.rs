use crate::server::{
    data::game_result::GameResultRepository, model::game_result::UpsertGameResultParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_standings;
mod rerank;
