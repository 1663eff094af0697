// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout gcm-keystore.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(KeyBytes32, 32); // Future: typed AES-256 material once widths stop varying
fixed_alias!(KeyBytes16, 16); // Future: typed AES-128 material

// Dynamic secrets
dynamic_alias!(KeyMaterial, Vec<u8>); // width depends on KeyAlgorithm (16 or 32 bytes)
dynamic_alias!(StorePassphrase, String); // SQLCipher passphrase for the key store
dynamic_alias!(PlainText, Vec<u8>); // Future: zeroizing wrappers on the provider surface
dynamic_alias!(CypherText, Vec<u8>); // Future: same, for sealed blobs handed to callers

// Random secrets
random_alias!(RandomKeyBytes32, 32);
random_alias!(RandomKeyBytes16, 16);
