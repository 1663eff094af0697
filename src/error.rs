// src/error.rs
//! Public error type for the entire crate

use crate::keystore::KeyId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no key with id {0} in the store")]
    UnknownKey(KeyId),

    #[error("key material is {actual} bytes, expected {expected}")]
    KeyLength { expected: usize, actual: usize },

    #[error("unknown key algorithm in store: {0}")]
    UnknownAlgorithm(String),

    #[error("output buffer holds {capacity} bytes, operation needs {needed}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("ciphertext is {len} bytes, shorter than nonce plus tag")]
    TruncatedCiphertext { len: usize },

    #[error("GCM tag verification failed")]
    Authentication,

    #[error("AES-GCM encryption failed")]
    Encrypt,

    #[error("insecure export is disabled (features.allow_insecure_export)")]
    ExportDisabled,

    #[error("GKS_STORE_KEY must be set when dev keys are disabled")]
    MissingStoreKey,
}
