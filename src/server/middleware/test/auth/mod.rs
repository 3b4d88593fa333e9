use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
};
use entity::sea_orm_active_enums::{TeamRole, UserRole};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod require;
