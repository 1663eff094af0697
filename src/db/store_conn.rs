// src/db/store_conn.rs
use std::{env, fs, path::Path};

use rusqlite::Connection;

use crate::aliases::StorePassphrase;
use crate::consts::{DB_KDF_ITERATIONS, DB_KDF_ITERATIONS_FAST};
use crate::error::{CoreError, Result};

/// Open the key store at the configured location
///
/// `GKS_STORE_DB` / `GKS_STORE_KEY` override the config file for full
/// test isolation.
pub fn open_store_db() -> Result<Connection> {
    let config = crate::config::load();

    let db_path = env::var("GKS_STORE_DB").unwrap_or_else(|_| config.paths.store_db.clone());

    let passphrase = if config.features.use_dev_keys {
        StorePassphrase::new(config.keys.store_key.clone())
    } else {
        StorePassphrase::new(env::var("GKS_STORE_KEY").map_err(|_| CoreError::MissingStoreKey)?)
    };

    open_store_db_at(Path::new(&db_path), &passphrase)
}

/// Open (or create) the key store at an explicit path
pub fn open_store_db_at(path: &Path, passphrase: &StorePassphrase) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let conn = Connection::open(path)?;

    let kdf_iter = if crate::config::load().features.skip_kdf_slowdown {
        DB_KDF_ITERATIONS_FAST
    } else {
        DB_KDF_ITERATIONS
    };

    // SQL string literal: embedded quotes must be doubled
    let quoted = passphrase.expose_secret().replace('\'', "''");
    conn.execute_batch(&format!("PRAGMA key = '{quoted}';"))?;
    conn.execute_batch(&format!(
        r#"
        PRAGMA cipher_page_size = 4096;
        PRAGMA kdf_iter = {kdf_iter};
        PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
        PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
        PRAGMA cipher_plaintext_header_size = 0;

        CREATE TABLE IF NOT EXISTS keys (
            key_id INTEGER PRIMARY KEY AUTOINCREMENT,
            algorithm TEXT NOT NULL,
            material BLOB NOT NULL,
            fingerprint TEXT NOT NULL,
            label TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_keys_fingerprint ON keys(fingerprint);
        "#
    ))?;

    Ok(conn)
}
