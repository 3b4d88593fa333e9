use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod admin_exists;
mod create;
mod delete;
mod find_credentials_by_user_name;
mod get_all;
mod get_by_id;
mod update;

fn create_params(user_name: &str) -> CreateUserParams {
    CreateUserParams {
        user_name: user_name.to_string(),
        display_name: None,
        avatar_url: None,
        role: UserRole::Player,
        status: "active".to_string(),
        password_hash: "hash".to_string(),
    }
}
