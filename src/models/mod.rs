// src/models/mod.rs

pub mod destination;
pub mod question;
pub mod user;
