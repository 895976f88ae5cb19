//! AES-128 block encryption.

use crate::backend::{AesBackend, Backend, BackendKind};
use crate::block::Block;
use crate::key::{MasterKey, RoundKeySchedule, ROUNDS};
use crate::key_schedule::expand_key;
use crate::with_backend;

/// Encrypts a single 16-byte block with pre-expanded round keys.
#[inline(always)]
pub fn encrypt_block<B: AesBackend>(backend: &B, schedule: &RoundKeySchedule, block: &Block) -> Block {
    let mut state = backend.xor(
        backend.load_block(block),
        backend.load_block(schedule.round_key(0)),
    );
    for round in 1..ROUNDS {
        state = backend.aes_round(state, backend.load_block(schedule.round_key(round)));
    }
    state = backend.aes_last_round(state, backend.load_block(schedule.round_key(ROUNDS)));
    backend.store_block(state)
}

/// One AES-128 instance: a key schedule bound to a backend.
#[derive(Clone, Copy, Debug)]
pub struct Aes128 {
    backend: Backend,
    schedule: RoundKeySchedule,
}

impl Aes128 {
    /// Expands `key` using the best backend for this CPU.
    pub fn new(key: &MasterKey) -> Self {
        Self::with_backend(Backend::detect(), key)
    }

    /// Expands `key` using an explicit backend.
    pub fn with_backend(backend: Backend, key: &MasterKey) -> Self {
        let schedule = with_backend!(&backend, |b| expand_key(b, key));
        Self { backend, schedule }
    }

    /// The backend this instance runs on.
    pub fn backend(&self) -> BackendKind {
        self.backend.kind()
    }

    /// The expanded round keys.
    pub fn schedule(&self) -> &RoundKeySchedule {
        &self.schedule
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        with_backend!(&self.backend, |b| encrypt_block(b, &self.schedule, block))
    }
}
