// src/config/defaults.rs
use crate::config::app::{Features, Keys, Paths};
use crate::consts::DEFAULT_STORE_FILENAME;
use std::path::PathBuf;

pub const DEFAULT_STORE_KEY: &str = "dev-store-passphrase-2025";

pub fn default_keys() -> Keys {
    Keys {
        store_key: DEFAULT_STORE_KEY.into(),
    }
}

pub fn default_paths() -> Paths {
    let store_db = dirs::data_dir()
        .map(|d| d.join("gcm-keystore").join(DEFAULT_STORE_FILENAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILENAME));
    Paths {
        store_db: store_db.to_string_lossy().into_owned(),
    }
}

pub fn default_features() -> Features {
    Features {
        use_dev_keys: true,
        skip_kdf_slowdown: true,
        allow_insecure_export: true,
    }
}
