// src/db/mod.rs
//! SQLCipher-backed key store database
//!
//! Connection setup lives in `store_conn`, row-level operations in
//! `store_ops`. Key material never leaves this layer unwrapped — rows are
//! loaded into `KeyMaterial` secrets.

pub mod store_conn;
pub mod store_ops;
