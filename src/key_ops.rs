// src/key_ops.rs
//! Key material generation and representation utilities
//!
//! This module handles secure key generation, blake3 fingerprints,
//! and multiple representations (hex, base64, etc.) for keys.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::aliases::{KeyMaterial, RandomKeyBytes16, RandomKeyBytes32, SecureRandomExt};
use crate::consts::FINGERPRINT_LENGTH_HEX;
use crate::enums::KeyAlgorithm;

/// Generate fresh random key material for the given algorithm
#[inline]
pub fn generate_material(algorithm: KeyAlgorithm) -> KeyMaterial {
    match algorithm {
        KeyAlgorithm::Aes256Gcm => KeyMaterial::new((**RandomKeyBytes32::new()).to_vec()),
        KeyAlgorithm::Aes128Gcm => KeyMaterial::new((**RandomKeyBytes16::new()).to_vec()),
    }
}

/// Short blake3 fingerprint of key material — safe to log and list
pub fn fingerprint_hex(material: &[u8]) -> String {
    let hash = blake3::Hasher::new().update(material).finalize();
    hash.to_hex()[..FINGERPRINT_LENGTH_HEX].to_string()
}

/// Multiple string representations of key material for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn material_representations(material: &KeyMaterial) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(material.expose_secret()),
        base64: STANDARD.encode(material.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(material.expose_secret()),
    }
}
