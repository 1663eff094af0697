// src/cipher.rs
//! AES-GCM primitive — seal/open with a self-contained wire shape
//!
//! Ciphertexts are framed as `nonce(12) ‖ ct ‖ tag(16)`, so a blob carries
//! everything decryption needs and the key store stays stateless.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::Aead;
use aes_gcm::{Aes128Gcm, Aes256Gcm, KeyInit};
use rand::RngCore;

use crate::consts::{GCM_NONCE_LEN, GCM_OVERHEAD};
use crate::enums::KeyAlgorithm;
use crate::error::{CoreError, Result};

/// Dispatches encrypt/decrypt over the two supported key widths.
///
/// The enum exists because `Aes128Gcm` and `Aes256Gcm` are distinct types
/// and the width is only known at runtime, from the stored key row.
pub enum GcmCipher {
    Aes128(Box<Aes128Gcm>),
    Aes256(Box<Aes256Gcm>),
}

impl core::fmt::Debug for GcmCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GcmCipher::Aes128(_) => f.write_str("GcmCipher::Aes128(..)"),
            GcmCipher::Aes256(_) => f.write_str("GcmCipher::Aes256(..)"),
        }
    }
}

impl GcmCipher {
    /// Build a cipher from raw key material, validating its width
    pub fn from_material(algorithm: KeyAlgorithm, material: &[u8]) -> Result<Self> {
        if material.len() != algorithm.key_len() {
            return Err(CoreError::KeyLength {
                expected: algorithm.key_len(),
                actual: material.len(),
            });
        }
        match algorithm {
            KeyAlgorithm::Aes128Gcm => Ok(GcmCipher::Aes128(Box::new(Aes128Gcm::new(
                GenericArray::from_slice(material),
            )))),
            KeyAlgorithm::Aes256Gcm => Ok(GcmCipher::Aes256(Box::new(Aes256Gcm::new(
                GenericArray::from_slice(material),
            )))),
        }
    }

    /// Encrypt with a fresh random nonce → framed ciphertext
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce = [0u8; GCM_NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce);
        self.seal_with_nonce(&nonce, plaintext)
    }

    /// Encrypt with a caller-supplied nonce → framed ciphertext
    ///
    /// Nonce reuse under one key breaks GCM. Everything except known-answer
    /// vector tests should go through [`GcmCipher::seal`].
    pub fn seal_with_nonce(
        &self,
        nonce: &[u8; GCM_NONCE_LEN],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let nonce_ga = GenericArray::from_slice(nonce);
        let ct = match self {
            GcmCipher::Aes128(cipher) => cipher.encrypt(nonce_ga, plaintext),
            GcmCipher::Aes256(cipher) => cipher.encrypt(nonce_ga, plaintext),
        }
        .map_err(|_| CoreError::Encrypt)?;

        let mut framed = Vec::with_capacity(GCM_NONCE_LEN + ct.len());
        framed.extend_from_slice(nonce);
        framed.extend_from_slice(&ct);
        Ok(framed)
    }

    /// Authenticate and decrypt a framed ciphertext
    pub fn open(&self, framed: &[u8]) -> Result<Vec<u8>> {
        if framed.len() < GCM_OVERHEAD {
            return Err(CoreError::TruncatedCiphertext { len: framed.len() });
        }
        let (nonce, ct) = framed.split_at(GCM_NONCE_LEN);
        let nonce_ga = GenericArray::from_slice(nonce);
        match self {
            GcmCipher::Aes128(cipher) => cipher.decrypt(nonce_ga, ct),
            GcmCipher::Aes256(cipher) => cipher.decrypt(nonce_ga, ct),
        }
        .map_err(|_| CoreError::Authentication)
    }
}
