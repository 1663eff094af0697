// src/export/mod.rs
//! Key export for backup and migration

pub use json::export_to_json;

mod json;
