mod ctf_service;
mod game;
mod game_result;
mod membership;
mod team;
mod university;
mod user;
