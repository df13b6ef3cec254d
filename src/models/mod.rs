// src/models/mod.rs

pub mod execution;
pub mod problem;
pub mod submission;
pub mod user;
