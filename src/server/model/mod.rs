//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary,
//! which is also where absent optional fields are replaced with computed defaults.

pub mod ctf_service;
pub mod game;
pub mod game_result;
pub mod membership;
pub mod profile;
pub mod team;
pub mod university;
pub mod user;
