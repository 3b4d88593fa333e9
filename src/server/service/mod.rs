//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning absent rows and duplicates into `NotFound` and `Conflict`

pub mod auth;
pub mod ctf_service;
pub mod game;
pub mod game_result;
pub mod membership;
pub mod scoreboard;
pub mod team;
pub mod university;
pub mod user;
