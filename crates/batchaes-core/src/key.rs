//! Key types for AES-128.

use core::borrow::Borrow;

use crate::block::{Block, BLOCK_LEN};

/// Number of AES-128 rounds.
pub const ROUNDS: usize = 10;

/// Size of an expanded AES-128 key schedule in bytes.
pub const SCHEDULE_LEN: usize = (ROUNDS + 1) * BLOCK_LEN;

/// AES-128 master key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterKey(pub [u8; 16]);

impl MasterKey {
    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl From<[u8; 16]> for MasterKey {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl Borrow<[u8; 16]> for MasterKey {
    #[inline]
    fn borrow(&self) -> &[u8; 16] {
        &self.0
    }
}

/// Expanded round keys for one AES-128 instance.
///
/// A schedule is plain owned data. Batches hold one per instance, either in
/// caller-provided scratch or on the stack, so no two instances ever share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeySchedule {
    pub(crate) keys: [Block; ROUNDS + 1],
}

impl RoundKeySchedule {
    /// An all-zero schedule, used to size scratch buffers.
    pub const fn zeroed() -> Self {
        Self {
            keys: [[0u8; BLOCK_LEN]; ROUNDS + 1],
        }
    }

    /// Number of rounds the schedule drives (always 10).
    #[inline]
    pub const fn rounds(&self) -> usize {
        ROUNDS
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.keys[round]
    }

    /// The schedule as a contiguous 176-byte buffer, round key 0 first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.keys.as_flattened()
    }
}

impl Default for RoundKeySchedule {
    fn default() -> Self {
        Self::zeroed()
    }
}
