// tests/crypto_tests.rs
use gcm_keystore::cipher::GcmCipher;
use gcm_keystore::consts::{GCM_NONCE_LEN, GCM_OVERHEAD};
use gcm_keystore::error::CoreError;
use gcm_keystore::key_ops::generate_material;
use gcm_keystore::KeyAlgorithm;

fn cipher_for(algorithm: KeyAlgorithm) -> GcmCipher {
    let material = generate_material(algorithm);
    GcmCipher::from_material(algorithm, material.expose_secret()).unwrap()
}

#[test]
fn test_seal_open_roundtrip_aes256() {
    let cipher = cipher_for(KeyAlgorithm::Aes256Gcm);
    let plaintext = b"Attack at dawn!";

    let framed = cipher.seal(plaintext).unwrap();
    assert_eq!(framed.len(), plaintext.len() + GCM_OVERHEAD);

    let opened = cipher.open(&framed).unwrap();
    assert_eq!(opened, plaintext);
}

#[test]
fn test_seal_open_roundtrip_aes128() {
    let cipher = cipher_for(KeyAlgorithm::Aes128Gcm);
    let plaintext = b"shorter key, same contract";

    let framed = cipher.seal(plaintext).unwrap();
    let opened = cipher.open(&framed).unwrap();
    assert_eq!(opened, plaintext);
}

#[test]
fn test_two_seals_differ() {
    // Random nonces: sealing the same plaintext twice must never collide
    let cipher = cipher_for(KeyAlgorithm::Aes256Gcm);
    let a = cipher.seal(b"same input").unwrap();
    let b = cipher.seal(b"same input").unwrap();
    assert_ne!(a, b);
    assert_ne!(a[..GCM_NONCE_LEN], b[..GCM_NONCE_LEN]);
}

#[test]
fn test_tampered_ciphertext_fails_authentication() {
    let cipher = cipher_for(KeyAlgorithm::Aes256Gcm);
    let mut framed = cipher.seal(b"integrity matters").unwrap();

    let last = framed.len() - 1;
    framed[last] ^= 0x01;

    let err = cipher.open(&framed).unwrap_err();
    assert!(matches!(err, CoreError::Authentication));
}

#[test]
fn test_tampered_nonce_fails_authentication() {
    let cipher = cipher_for(KeyAlgorithm::Aes256Gcm);
    let mut framed = cipher.seal(b"integrity matters").unwrap();

    framed[0] ^= 0x01;

    let err = cipher.open(&framed).unwrap_err();
    assert!(matches!(err, CoreError::Authentication));
}

#[test]
fn test_truncated_ciphertext_is_rejected_before_decryption() {
    let cipher = cipher_for(KeyAlgorithm::Aes256Gcm);

    let err = cipher.open(&[0u8; GCM_OVERHEAD - 1]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::TruncatedCiphertext {
            len
        } if len == GCM_OVERHEAD - 1
    ));
}

#[test]
fn test_from_material_rejects_wrong_widths() {
    let err = GcmCipher::from_material(KeyAlgorithm::Aes256Gcm, &[0u8; 16]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::KeyLength {
            expected: 32,
            actual: 16
        }
    ));

    let err = GcmCipher::from_material(KeyAlgorithm::Aes128Gcm, &[0u8; 32]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::KeyLength {
            expected: 16,
            actual: 32
        }
    ));
}

#[test]
fn test_empty_plaintext_roundtrips() {
    let cipher = cipher_for(KeyAlgorithm::Aes256Gcm);
    let framed = cipher.seal(b"").unwrap();
    assert_eq!(framed.len(), GCM_OVERHEAD);
    assert_eq!(cipher.open(&framed).unwrap(), Vec::<u8>::new());
}
