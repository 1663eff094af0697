// src/provider.rs
//! The encrypt/decrypt contract — caller buffers and bytes-written
//!
//! These mirror the classic HSM provider shape: an opaque key handle, an
//! input buffer, an output buffer with a capacity, and the number of bytes
//! actually written on success. Capacity is validated before any key
//! material is loaded, so a sizing probe never does AEAD work.

use crate::consts::GCM_OVERHEAD;
use crate::error::{CoreError, Result};
use crate::keystore::{KeyId, Keystore};

impl Keystore {
    /// Encrypt `plaintext` under the key behind `key_id`.
    ///
    /// Writes `nonce ‖ ct ‖ tag` into `ciphertext` and returns the byte
    /// count, always `plaintext.len() + GCM_OVERHEAD`. Fails with
    /// `BufferTooSmall` before touching the store if the capacity is short.
    pub fn aes_gcm_encrypt(
        &self,
        key_id: KeyId,
        plaintext: &[u8],
        ciphertext: &mut [u8],
    ) -> Result<usize> {
        let needed = plaintext.len() + GCM_OVERHEAD;
        if ciphertext.len() < needed {
            return Err(CoreError::BufferTooSmall {
                needed,
                capacity: ciphertext.len(),
            });
        }

        let sealed = self.load_cipher(key_id)?.seal(plaintext)?;
        debug_assert_eq!(sealed.len(), needed);
        ciphertext[..needed].copy_from_slice(&sealed);
        Ok(needed)
    }

    /// Decrypt a `nonce ‖ ct ‖ tag` buffer produced by [`Self::aes_gcm_encrypt`].
    ///
    /// Returns the plaintext byte count, always
    /// `ciphertext.len() - GCM_OVERHEAD`. Tag mismatch is
    /// `CoreError::Authentication`, distinct from the shape errors.
    pub fn aes_gcm_decrypt(
        &self,
        key_id: KeyId,
        ciphertext: &[u8],
        plaintext: &mut [u8],
    ) -> Result<usize> {
        if ciphertext.len() < GCM_OVERHEAD {
            return Err(CoreError::TruncatedCiphertext {
                len: ciphertext.len(),
            });
        }
        let needed = ciphertext.len() - GCM_OVERHEAD;
        if plaintext.len() < needed {
            return Err(CoreError::BufferTooSmall {
                needed,
                capacity: plaintext.len(),
            });
        }

        let opened = self.load_cipher(key_id)?.open(ciphertext)?;
        debug_assert_eq!(opened.len(), needed);
        plaintext[..opened.len()].copy_from_slice(&opened);
        Ok(opened.len())
    }

    /// Encrypt into a fresh `Vec` — convenience over the buffer contract
    pub fn encrypt_to_vec(&self, key_id: KeyId, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.load_cipher(key_id)?.seal(plaintext)
    }

    /// Decrypt into a fresh `Vec` — convenience over the buffer contract
    pub fn decrypt_to_vec(&self, key_id: KeyId, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.load_cipher(key_id)?.open(ciphertext)
    }
}
