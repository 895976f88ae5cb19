//! AES-128 key expansion on top of [`AesBackend`].
//!
//! The S-box is applied with the final-round instruction instead of a table:
//! when all four columns of the state hold the same word, ShiftRows leaves the
//! state unchanged and the last round reduces to SubBytes plus an xor with the
//! round constant. The remaining word-wise xors of FIPS-197 are done on the
//! whole 128-bit key with two byte shuffles.

use core::borrow::Borrow;

use crate::backend::AesBackend;
use crate::block::Block;
use crate::key::{RoundKeySchedule, ROUNDS};

/// Round constants: successive doublings of 1 in GF(2^8) mod x^8+x^4+x^3+x+1.
pub const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// RotWord of the last key word, copied into every 32-bit lane.
const ROT_WORD: Block = [
    0x0d, 0x0e, 0x0f, 0x0c, 0x0d, 0x0e, 0x0f, 0x0c, 0x0d, 0x0e, 0x0f, 0x0c, 0x0d, 0x0e, 0x0f, 0x0c,
];

/// Shifts each 64-bit lane left by 32 bits: `(w0, w1, w2, w3) -> (0, w0, 0, w2)`.
const LANE_SHIFT: Block = [
    0x80, 0x80, 0x80, 0x80, 0x00, 0x01, 0x02, 0x03, 0x80, 0x80, 0x80, 0x80, 0x08, 0x09, 0x0a, 0x0b,
];

/// Broadcasts word 1 into the upper half: `(w0, w1, w2, w3) -> (0, 0, w1, w1)`.
const LANE_SPREAD: Block = [
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x04, 0x05, 0x06, 0x07, 0x04, 0x05, 0x06, 0x07,
];

/// The round constant in the low byte of every 32-bit lane.
#[inline(always)]
fn rcon_block(rcon: u8) -> Block {
    let mut block = [0u8; 16];
    for lane in block.chunks_exact_mut(4) {
        lane[0] = rcon;
    }
    block
}

/// Expands `key` into `schedule`, overwriting all 11 round keys.
///
/// `key` is a [`MasterKey`](crate::MasterKey) or its raw bytes.
#[inline(always)]
pub fn expand_key_into<B, K>(backend: &B, key: &K, schedule: &mut RoundKeySchedule)
where
    B: AesBackend,
    K: Borrow<[u8; 16]> + ?Sized,
{
    let key: &[u8; 16] = key.borrow();
    let rot_word = backend.load_block(&ROT_WORD);
    let lane_shift = backend.load_block(&LANE_SHIFT);
    let lane_spread = backend.load_block(&LANE_SPREAD);

    let mut round_key = backend.load_block(key);
    schedule.keys[0] = *key;

    for (round, &rcon) in RCON.iter().enumerate() {
        // t = SubWord(RotWord(w3)) ^ rcon, in every lane
        let rotated = backend.shuffle_bytes(round_key, rot_word);
        let t = backend.aes_last_round(rotated, backend.load_block(&rcon_block(rcon)));

        // (w0, w0^w1, w0^w1^w2, w0^w1^w2^w3)
        round_key = backend.xor(round_key, backend.shuffle_bytes(round_key, lane_shift));
        round_key = backend.xor(round_key, backend.shuffle_bytes(round_key, lane_spread));

        round_key = backend.xor(round_key, t);
        schedule.keys[round + 1] = backend.store_block(round_key);
    }
}

/// Expands `key` into a fresh schedule.
pub fn expand_key<B, K>(backend: &B, key: &K) -> RoundKeySchedule
where
    B: AesBackend,
    K: Borrow<[u8; 16]> + ?Sized,
{
    let mut schedule = RoundKeySchedule::zeroed();
    expand_key_into(backend, key, &mut schedule);
    schedule
}
