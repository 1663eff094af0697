// tests/export_tests.rs
mod common;
use common::TestStore;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use gcm_keystore::aliases::KeyMaterial;
use gcm_keystore::{export_to_json, KeyAlgorithm};
use serde_json::Value;
use std::fs;

#[test]
fn export_contains_correct_material_and_metadata() {
    let ts = TestStore::new();
    let store = ts.open();

    let raw = vec![0x5au8; 32];
    let key_id = store
        .import_key(
            KeyAlgorithm::Aes256Gcm,
            KeyMaterial::new(raw.clone()),
            Some("Payroll 2025"),
        )
        .unwrap();

    let export_path = ts.path().join("export.json");
    export_to_json(&store, export_path.to_str().unwrap()).expect("export failed");

    let json_str = fs::read_to_string(&export_path).unwrap();
    let json: Value = serde_json::from_str(&json_str).unwrap();

    assert_eq!(json["format"], "gcm-keystore-export-v1");
    assert_eq!(json["total_keys"], 1);

    let key = &json["keys"][0];
    assert_eq!(key["key_id"], key_id.raw());
    assert_eq!(key["algorithm"], "aes-256-gcm");
    assert_eq!(key["label"], "Payroll 2025");

    let decoded = URL_SAFE_NO_PAD
        .decode(key["material_base64url"].as_str().unwrap())
        .unwrap();
    assert_eq!(decoded, raw);
}

#[test]
fn exported_material_reimports_and_decrypts() {
    let ts = TestStore::new();
    let store = ts.open();

    let key_id = store.generate_key(KeyAlgorithm::Aes128Gcm, None).unwrap();
    let ciphertext = store.encrypt_to_vec(key_id, b"migrate me").unwrap();

    let export_path = ts.path().join("export.json");
    export_to_json(&store, export_path.to_str().unwrap()).unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    let material = URL_SAFE_NO_PAD
        .decode(json["keys"][0]["material_base64url"].as_str().unwrap())
        .unwrap();

    // A second store, seeded only from the export, can read the ciphertext
    let ts2 = TestStore::new();
    let store2 = ts2.open();
    let imported = store2
        .import_key(KeyAlgorithm::Aes128Gcm, KeyMaterial::new(material), None)
        .unwrap();
    assert_eq!(
        store2.decrypt_to_vec(imported, &ciphertext).unwrap(),
        b"migrate me"
    );
}
