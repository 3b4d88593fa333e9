use crate::server::{data::ctf_service::CtfServiceRepository, model::ctf_service::UpsertCtfServiceParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod crud;
