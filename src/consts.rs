// src/consts.rs
//! Shared constants — security parameters and defaults

/// GCM nonce length in bytes (96-bit, the standard fast path)
pub const GCM_NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes
pub const GCM_TAG_LEN: usize = 16;

/// Total ciphertext overhead: leading nonce + trailing tag
pub const GCM_OVERHEAD: usize = GCM_NONCE_LEN + GCM_TAG_LEN;

/// AES-128 key length in bytes
pub const AES128_KEY_LEN: usize = 16;

/// AES-256 key length in bytes
pub const AES256_KEY_LEN: usize = 32;

/// Recommended KDF iterations for SQLCipher databases (2025+)
// ~0.1–0.2s on modern hardware — good default
pub const DB_KDF_ITERATIONS: u32 = 256_000;

/// Low-iteration KDF for tests (`features.skip_kdf_slowdown`)
pub const DB_KDF_ITERATIONS_FAST: u32 = 1_000;

/// Hex characters of the blake3 key fingerprint shown in listings
pub const FINGERPRINT_LENGTH_HEX: usize = 16;

/// Default key store filename
pub const DEFAULT_STORE_FILENAME: &str = "keys.db";
