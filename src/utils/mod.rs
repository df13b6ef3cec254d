// src/utils/mod.rs

pub mod format;
