use crate::server::{
    data::{game_result::GameResultRepository, team::TeamRepository},
    model::team::{CreateTeamParams, UpdateTeamParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;
