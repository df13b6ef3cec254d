// src/handlers/mod.rs

pub mod execution;
pub mod problems;
