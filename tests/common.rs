// tests/common.rs
//! Shared test utilities — temp-dir keystore + logging setup

use gcm_keystore::aliases::StorePassphrase;
use gcm_keystore::Keystore;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// A key store in a private temp dir — dropped (and deleted) with the struct
pub struct TestStore {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Self {
        TestStore {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("keys.db")
    }

    pub fn passphrase(&self) -> StorePassphrase {
        StorePassphrase::new("test-store-passphrase".to_string())
    }

    /// Open (or reopen) the store — reopening exercises persistence
    pub fn open(&self) -> Keystore {
        Keystore::open_at(self.db_path(), &self.passphrase()).expect("open keystore")
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
