// src/bin/keygen.rs
//! keygen — mint a key in the store and print its handle + representations

use anyhow::{Context, Result};
use gcm_keystore::{
    generate_material, material_representations, KeyAlgorithm, Keystore,
};
use rpassword::read_password;
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = gcm_keystore::load_config();
    if !config.features.use_dev_keys && std::env::var("GKS_STORE_KEY").is_err() {
        print!("Store passphrase: ");
        std::io::stdout().flush()?;
        let passphrase = read_password().context("Failed to read passphrase")?;
        std::env::set_var("GKS_STORE_KEY", passphrase);
    }

    let mut args = std::env::args().skip(1);
    let algorithm = match args.next().as_deref() {
        Some("aes128") => KeyAlgorithm::Aes128Gcm,
        Some("aes256") | None => KeyAlgorithm::Aes256Gcm,
        Some(other) => anyhow::bail!("Unknown algorithm {other:?} (use aes128 or aes256)"),
    };
    let label = args.next();

    let store = Keystore::open().context("Failed to open key store — is GKS_STORE_KEY set?")?;

    let material = generate_material(algorithm);
    let repr = material_representations(&material);
    let key_id = store.import_key(algorithm, material, label.as_deref())?;

    info!("Stored new {algorithm} key as id {key_id}");

    println!("key_id:           {key_id}");
    println!("algorithm:        {algorithm}");
    println!("hex:              {}", repr.hex);
    println!("base64:           {}", repr.base64);
    println!("base64url_no_pad: {}", repr.base64url_no_pad);
    Ok(())
}
