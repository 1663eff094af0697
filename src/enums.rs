// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: key algorithms, export formats, etc.

use crate::consts::{AES128_KEY_LEN, AES256_KEY_LEN};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported key algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum KeyAlgorithm {
    #[default]
    Aes256Gcm,
    Aes128Gcm,
    // Future:
    // ChaCha20Poly1305,
    // XChaCha20Poly1305,
}

impl KeyAlgorithm {
    /// Key material width in bytes
    pub fn key_len(&self) -> usize {
        match self {
            KeyAlgorithm::Aes256Gcm => AES256_KEY_LEN,
            KeyAlgorithm::Aes128Gcm => AES128_KEY_LEN,
        }
    }

    /// Stable name stored in the `algorithm` column
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAlgorithm::Aes256Gcm => "aes-256-gcm",
            KeyAlgorithm::Aes128Gcm => "aes-128-gcm",
        }
    }

    /// Parse the stored column value back into an algorithm
    pub fn from_store_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "aes-256-gcm" => Ok(KeyAlgorithm::Aes256Gcm),
            "aes-128-gcm" => Ok(KeyAlgorithm::Aes128Gcm),
            other => Err(CoreError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Future export formats (JSON, encrypted backup, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum ExportFormat {
    #[default]
    JsonV1,
    // EncryptedBackupV1,
}
