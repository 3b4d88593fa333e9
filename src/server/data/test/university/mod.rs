use crate::server::{
    data::university::{UniversityRepository, UNIVERSITY_LIST_LIMIT},
    model::university::UpsertUniversityParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod get_all;
mod search;
mod update;
