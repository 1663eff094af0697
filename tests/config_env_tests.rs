// tests/config_env_tests.rs
//! Env-driven open path — its own test binary because the global config is a
//! process-wide OnceLock and these env vars must be set before first load.
//!
//! Kept as one test function: env vars are process state and the other
//! test binaries never touch `Keystore::open()`.

use gcm_keystore::error::CoreError;
use gcm_keystore::{KeyAlgorithm, Keystore};

#[test]
fn open_honors_env_overrides_and_requires_store_key() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("keys.db");

    // GKS_TEST_MODE forces use_dev_keys off, so the passphrase must come
    // from GKS_STORE_KEY
    std::env::set_var("GKS_TEST_MODE", "1");
    std::env::set_var("GKS_STORE_DB", db_path.to_str().unwrap());
    std::env::remove_var("GKS_STORE_KEY");

    let err = Keystore::open().unwrap_err();
    assert!(matches!(err, CoreError::MissingStoreKey));
    assert!(!db_path.exists());

    std::env::set_var("GKS_STORE_KEY", "env-provided-passphrase");
    let store = Keystore::open().expect("open with env passphrase");
    let key_id = store.generate_key(KeyAlgorithm::Aes256Gcm, None).unwrap();
    let ciphertext = store.encrypt_to_vec(key_id, b"env path").unwrap();
    assert_eq!(store.decrypt_to_vec(key_id, &ciphertext).unwrap(), b"env path");

    // The store landed where GKS_STORE_DB pointed, not at the config default
    assert!(db_path.exists());
}
