use crate::server::{
    data::membership::MembershipRepository,
    model::membership::{ApprovalOutcome, JoinTeamParams},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod approve;
mod create_request;
mod get_history;
