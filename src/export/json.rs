// src/export/json.rs
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde_json::json;

use crate::db::store_ops::load_all_keys_with_material;
use crate::error::{CoreError, Result};
use crate::keystore::Keystore;

/// Export every key (metadata + material) to a portable JSON file using
/// Base64URL encoding.
///
/// SECURITY WARNING: the output contains raw key material. Anyone holding
/// this file can decrypt everything those keys ever protected. Refused
/// unless `features.allow_insecure_export` is set.
pub fn export_to_json(store: &Keystore, path: &str) -> Result<()> {
    let config = crate::config::load();
    if !config.features.allow_insecure_export {
        return Err(CoreError::ExportDisabled);
    }

    let rows = load_all_keys_with_material(&store.conn)?;

    let keys: Vec<serde_json::Value> = rows
        .iter()
        .map(|(info, material)| {
            json!({
                "key_id": info.key_id,
                "algorithm": info.algorithm.as_str(),
                "label": info.label,
                "fingerprint": info.fingerprint,
                "created_at": info.created_at,
                "material_base64url": URL_SAFE_NO_PAD.encode(material.expose_secret()),
            })
        })
        .collect();

    let doc = json!({
        "format": "gcm-keystore-export-v1",
        "generated_at": Utc::now().to_rfc3339(),
        "total_keys": keys.len(),
        "keys": keys,
    });

    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}
