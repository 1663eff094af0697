// src/keystore.rs
//! The key store — opaque key handles over an SQLCipher database
//!
//! Callers hold a [`KeyId`] and never touch key material. Material exists
//! in cleartext only transiently, inside zeroizing `KeyMaterial` wrappers,
//! while a cipher instance is being built.

use std::fmt;
use std::path::Path;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::aliases::{KeyMaterial, StorePassphrase};
use crate::cipher::GcmCipher;
use crate::db::{store_conn, store_ops};
use crate::enums::KeyAlgorithm;
use crate::error::{CoreError, Result};
use crate::key_ops::{fingerprint_hex, generate_material};

/// Opaque handle to a key held inside the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(i64);

impl KeyId {
    pub(crate) fn new(raw: i64) -> Self {
        KeyId(raw)
    }

    /// The underlying rowid — for display and persistence, not arithmetic
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for one stored key — never includes material
#[derive(Debug, Clone, Serialize)]
pub struct KeyInfo {
    pub key_id: KeyId,
    pub algorithm: KeyAlgorithm,
    pub label: Option<String>,
    pub fingerprint: String,
    pub created_at: String,
}

/// Handle to an open key store
#[derive(Debug)]
pub struct Keystore {
    pub(crate) conn: Connection,
}

impl Keystore {
    /// Open the store at the configured location (config file + env overrides)
    pub fn open() -> Result<Self> {
        Ok(Keystore {
            conn: store_conn::open_store_db()?,
        })
    }

    /// Open (or create) a store at an explicit path with an explicit passphrase
    pub fn open_at<P: AsRef<Path>>(path: P, passphrase: &StorePassphrase) -> Result<Self> {
        Ok(Keystore {
            conn: store_conn::open_store_db_at(path.as_ref(), passphrase)?,
        })
    }

    /// Generate fresh key material inside the store, returning only its handle
    pub fn generate_key(&self, algorithm: KeyAlgorithm, label: Option<&str>) -> Result<KeyId> {
        let material = generate_material(algorithm);
        let fingerprint = fingerprint_hex(material.expose_secret());
        store_ops::insert_key(&self.conn, algorithm, &material, &fingerprint, label)
    }

    /// Import existing key material (e.g. from a backup)
    pub fn import_key(
        &self,
        algorithm: KeyAlgorithm,
        material: KeyMaterial,
        label: Option<&str>,
    ) -> Result<KeyId> {
        if material.expose_secret().len() != algorithm.key_len() {
            return Err(CoreError::KeyLength {
                expected: algorithm.key_len(),
                actual: material.expose_secret().len(),
            });
        }
        let fingerprint = fingerprint_hex(material.expose_secret());
        store_ops::insert_key(&self.conn, algorithm, &material, &fingerprint, label)
    }

    /// Permanently remove a key — ciphertexts under it become undecryptable
    pub fn delete_key(&self, key_id: KeyId) -> Result<()> {
        store_ops::delete_key(&self.conn, key_id)
    }

    pub fn key_info(&self, key_id: KeyId) -> Result<KeyInfo> {
        store_ops::key_info(&self.conn, key_id)
    }

    pub fn list_keys(&self) -> Result<Vec<KeyInfo>> {
        store_ops::list_keys(&self.conn)
    }

    /// Load a key row and stand up a cipher for it
    pub(crate) fn load_cipher(&self, key_id: KeyId) -> Result<GcmCipher> {
        let (algorithm, material) = store_ops::load_key(&self.conn, key_id)?;
        GcmCipher::from_material(algorithm, material.expose_secret())
    }
}
