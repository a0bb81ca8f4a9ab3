// src/handlers/mod.rs

pub mod game;
pub mod health;
pub mod users;
