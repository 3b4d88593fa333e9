pub mod prelude;

pub mod game;
pub mod game_result;
pub mod game_service;
pub mod membership_request;
pub mod profile;
pub mod sea_orm_active_enums;
pub mod service;
pub mod team;
pub mod team_history;
pub mod university;
pub mod user;
