//! HTTP request handlers.
//!
//! Each handler checks access through `AuthGuard`, converts request DTOs into
//! parameter models, calls a service and converts the returned domain model back
//! into a DTO. Handlers carry `utoipa::path` annotations that drive both routing
//! and the OpenAPI document.

pub mod auth;
pub mod avatar;
pub mod ctf_service;
pub mod game;
pub mod game_result;
pub mod membership;
pub mod team;
pub mod university;
pub mod user;
