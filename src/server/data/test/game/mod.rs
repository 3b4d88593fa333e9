use crate::server::{
    data::{game::GameRepository, game_service::GameServiceRepository},
    model::game::UpsertGameParams,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod crud;
mod services;
