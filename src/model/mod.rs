//! Data transfer objects shared by the HTTP surface.
//!
//! These types describe the JSON bodies accepted and returned by the API and carry
//! `ToSchema` derives for the generated OpenAPI document. Server-side domain models
//! convert into these at the controller boundary.

pub mod api;
pub mod auth;
pub mod game;
pub mod game_result;
pub mod membership;
pub mod service;
pub mod team;
pub mod university;
pub mod user;
