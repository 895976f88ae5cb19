//! Batched encryption of independent AES-128 instances.

use core::borrow::Borrow;
use core::slice;

use batchaes_core::{
    with_backend, AesBackend, Backend, BackendKind, Block, MasterKey, RoundKeySchedule, BLOCK_LEN,
};
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::config::{BackendPreference, EngineConfig};
use crate::error::EngineError;

/// Encrypts batches of `(key, plaintext)` pairs, one AES-128 instance each.
///
/// Every batch runs in two phases: all key schedules are expanded into
/// per-instance scratch, then every block is encrypted under its own
/// schedule. Instance `i` reads only `keys[i]`, `plaintexts[i]` and
/// `scratch[i]` and writes only `ciphertexts[i]`, so batches can be split and
/// reordered freely.
#[derive(Clone, Copy, Debug)]
pub struct BatchEncryptor {
    backend: Backend,
    config: EngineConfig,
}

impl Default for BatchEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchEncryptor {
    /// Creates an encryptor with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(Backend::detect(), EngineConfig::default())
    }

    /// Creates an encryptor with an explicit configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let backend = match config.backend {
            BackendPreference::Auto => Backend::detect(),
            BackendPreference::Native => Backend::native().ok_or(EngineError::NativeUnavailable)?,
            BackendPreference::Portable => Backend::portable(),
        };
        Ok(Self::from_parts(backend, config))
    }

    fn from_parts(backend: Backend, config: EngineConfig) -> Self {
        debug!(
            backend = %backend.kind(),
            parallel_threshold = config.parallel_threshold,
            shard_size = config.shard_size,
            "created batch encryptor"
        );
        Self { backend, config }
    }

    /// The backend in use.
    pub fn backend(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Encrypts `plaintexts[i]` under `keys[i]` into `ciphertexts[i]`.
    ///
    /// `scratch` holds one key schedule per instance and is overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `keys` and `plaintexts` differ in length, or if `ciphertexts`
    /// or `scratch` are shorter than the batch.
    pub fn encrypt_batch(
        &self,
        keys: &[MasterKey],
        plaintexts: &[Block],
        ciphertexts: &mut [Block],
        scratch: &mut [RoundKeySchedule],
    ) {
        self.encrypt_checked(keys, plaintexts, ciphertexts, scratch)
    }

    /// Like [`encrypt_batch`](Self::encrypt_batch), allocating output and scratch.
    pub fn encrypt_batch_to_vec(&self, keys: &[MasterKey], plaintexts: &[Block]) -> Vec<Block> {
        let mut ciphertexts = vec![[0u8; BLOCK_LEN]; keys.len()];
        let mut scratch = vec![RoundKeySchedule::zeroed(); keys.len()];
        self.encrypt_batch(keys, plaintexts, &mut ciphertexts, &mut scratch);
        ciphertexts
    }

    /// Encrypts contiguous 16-byte keys and blocks into `ciphertexts`.
    ///
    /// The buffers are read in place as 16-byte chunks; `scratch` holds one
    /// key schedule per instance, as in [`encrypt_batch`](Self::encrypt_batch).
    ///
    /// # Panics
    ///
    /// Panics if `keys` is not a multiple of 16 bytes, if `plaintexts` differs
    /// from it in length, or if `ciphertexts` or `scratch` are shorter than
    /// the batch.
    pub fn encrypt_bytes(
        &self,
        keys: &[u8],
        plaintexts: &[u8],
        ciphertexts: &mut [u8],
        scratch: &mut [RoundKeySchedule],
    ) {
        assert_eq!(
            keys.len() % BLOCK_LEN,
            0,
            "key buffer length {} is not a multiple of {BLOCK_LEN}",
            keys.len()
        );
        assert_eq!(
            keys.len(),
            plaintexts.len(),
            "key and plaintext buffers differ in length"
        );

        let (keys, _) = keys.as_chunks::<BLOCK_LEN>();
        let (plaintexts, _) = plaintexts.as_chunks::<BLOCK_LEN>();
        let (ciphertexts, _) = ciphertexts.as_chunks_mut::<BLOCK_LEN>();
        self.encrypt_checked(keys, plaintexts, ciphertexts, scratch)
    }

    /// Encrypts a single block.
    pub fn encrypt_one(&self, key: &MasterKey, plaintext: &Block) -> Block {
        let mut ciphertext = [[0u8; BLOCK_LEN]];
        let mut scratch = [RoundKeySchedule::zeroed()];
        with_backend!(&self.backend, |b| {
            b.encrypt_instances(
                slice::from_ref(key),
                slice::from_ref(plaintext),
                &mut ciphertext,
                &mut scratch,
            )
        });
        ciphertext[0]
    }

    #[instrument(level = "trace", skip_all, fields(instances = keys.len()))]
    fn encrypt_checked<K>(
        &self,
        keys: &[K],
        plaintexts: &[Block],
        ciphertexts: &mut [Block],
        scratch: &mut [RoundKeySchedule],
    ) where
        K: Borrow<[u8; 16]> + Sync,
    {
        let n = keys.len();
        assert_eq!(
            plaintexts.len(),
            n,
            "batch has {n} keys but {} plaintexts",
            plaintexts.len()
        );
        assert!(
            ciphertexts.len() >= n,
            "ciphertext buffer holds {} blocks, batch needs {n}",
            ciphertexts.len()
        );
        assert!(
            scratch.len() >= n,
            "scratch holds {} schedules, batch needs {n}",
            scratch.len()
        );

        let ciphertexts = &mut ciphertexts[..n];
        let scratch = &mut scratch[..n];
        with_backend!(&self.backend, |b| self.run(b, keys, plaintexts, ciphertexts, scratch))
    }

    fn run<B, K>(
        &self,
        backend: &B,
        keys: &[K],
        plaintexts: &[Block],
        ciphertexts: &mut [Block],
        scratch: &mut [RoundKeySchedule],
    ) where
        B: AesBackend,
        K: Borrow<[u8; 16]> + Sync,
    {
        if keys.len() < self.config.parallel_threshold {
            backend.encrypt_instances(keys, plaintexts, ciphertexts, scratch);
            return;
        }

        let shard = self.config.effective_shard_size();
        trace!(shard, shards = keys.len().div_ceil(shard), "sharding batch");
        keys.par_chunks(shard)
            .zip(plaintexts.par_chunks(shard))
            .zip(ciphertexts.par_chunks_mut(shard))
            .zip(scratch.par_chunks_mut(shard))
            .for_each(|(((keys, plaintexts), ciphertexts), scratch)| {
                backend.encrypt_instances(keys, plaintexts, ciphertexts, scratch)
            });
    }
}
