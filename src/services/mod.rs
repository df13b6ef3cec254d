// src/services/mod.rs

pub mod api;
pub mod backend;
pub mod users;

pub use api::ApiClient;
pub use backend::{ExecutionBackend, ProblemBackend};
pub use users::{FixtureUserRepository, HttpUserRepository, UserRepository};
