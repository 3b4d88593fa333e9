//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-statement operations (user and team deletion, membership approval and leave,
//! result writes with their rank updates, game writes with their service links) run inside
//! a single transaction owned by the repository.

pub mod ctf_service;
pub mod game;
pub mod game_result;
pub mod game_service;
pub mod membership;
pub mod team;
pub mod university;
pub mod user;

#[cfg(test)]
mod test;
