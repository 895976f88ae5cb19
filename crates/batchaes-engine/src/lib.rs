//! Batched AES-128 encryption for protocols that evaluate many independent
//! cipher instances, such as garbled-circuit evaluation.
//!
//! A [`BatchEncryptor`] takes `N` index-aligned keys and plaintext blocks and
//! produces `N` ciphertexts. Each instance gets its own key schedule, so the
//! result for instance `i` depends only on `(keys[i], plaintexts[i])`. Large
//! batches are sharded across the rayon thread pool; see [`EngineConfig`].
//!
//! ```
//! use batchaes_engine::{BatchEncryptor, MasterKey};
//!
//! let engine = BatchEncryptor::new();
//! let keys = [MasterKey([0u8; 16]), MasterKey([1u8; 16])];
//! let blocks = [[0u8; 16]; 2];
//! let ciphertexts = engine.encrypt_batch_to_vec(&keys, &blocks);
//! assert_eq!(ciphertexts.len(), 2);
//! assert_ne!(ciphertexts[0], ciphertexts[1]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod error;

pub use batchaes_core::{Backend, BackendKind, Block, MasterKey, RoundKeySchedule};
pub use config::{BackendPreference, EngineConfig};
pub use engine::BatchEncryptor;
pub use error::EngineError;
