// src/workflow/mod.rs

pub mod catalog;
pub mod dashboard;
pub mod editor;
pub mod execution;
pub mod hints;
pub mod loader;
pub mod output;
pub mod session;
