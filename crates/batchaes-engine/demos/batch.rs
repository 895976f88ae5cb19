//! Encrypts a batch of random (key, block) pairs and prints the ciphertexts
//! in Base58Check form.
//!
//! Run with `RUST_LOG=debug cargo run -p batchaes-engine --example batch`.

use anyhow::{ensure, Result};
use batchaes_engine::{BatchEncryptor, EngineConfig, MasterKey};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Deterministic seed for reproducibility in the demo.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let n = 8;
    let mut keys = vec![MasterKey([0u8; 16]); n];
    let mut blocks = vec![[0u8; 16]; n];
    for (key, block) in keys.iter_mut().zip(blocks.iter_mut()) {
        rng.fill_bytes(&mut key.0);
        rng.fill_bytes(block);
    }

    let engine = BatchEncryptor::with_config(EngineConfig::default())?;
    let ciphertexts = engine.encrypt_batch_to_vec(&keys, &blocks);

    println!("backend: {}", engine.backend());
    for (i, ((key, block), ct)) in keys.iter().zip(&blocks).zip(&ciphertexts).enumerate() {
        ensure!(
            *ct == engine.encrypt_one(key, block),
            "instance {i} differs from single-block encryption"
        );
        let text = batchaes_base58::encode_check(ct);
        let decoded = batchaes_base58::decode_check(&text, ct.len())?;
        ensure!(decoded == ct, "base58check round trip failed for instance {i}");
        println!(
            "{i}: key={} pt={} ct={text}",
            hex::encode(key.0),
            hex::encode(block)
        );
    }
    Ok(())
}
