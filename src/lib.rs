// src/lib.rs

pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod workflow;

pub use routes::create_fixture_router;
