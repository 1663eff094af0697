// src/lib.rs
//! gcm-keystore — AES-GCM encryption keyed by opaque key identifiers
//!
//! Features:
//! - AES-128/256-GCM with self-contained ciphertexts (nonce ‖ ct ‖ tag)
//! - Keys live in an SQLCipher store; callers only ever hold a [`KeyId`]
//! - Caller-buffer encrypt/decrypt with bytes-written reporting
//! - Full secure-gate v0.5.8 integration

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod db;
pub mod enums;
pub mod error;
pub mod export;
pub mod key_ops;
pub mod keystore;
pub mod provider;

// Re-export everything users need at the crate root
pub use aliases::{KeyMaterial, StorePassphrase, SecureConversionsExt, SecureRandomExt};
pub use config::load as load_config;
pub use enums::KeyAlgorithm;
pub use error::{CoreError, Result as CoreResult};
pub use export::export_to_json;
pub use key_ops::{fingerprint_hex, generate_material, material_representations, KeyRepr};
pub use keystore::{KeyId, KeyInfo, Keystore};
