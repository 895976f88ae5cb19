//! Software AES round transformations.
//!
//! The state uses the FIPS-197 column-major byte order, which is also the
//! in-register order of the hardware AES instructions.

use crate::block::{xor_in_place, Block};
use crate::sbox::sbox;

/// Source index of each output byte under ShiftRows.
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (0x1b * (byte >> 7))
}

/// ShiftRows followed by SubBytes; the two steps commute.
#[inline]
fn sub_shift(state: &Block) -> Block {
    let mut out = [0u8; 16];
    for (dst, &src) in out.iter_mut().zip(SHIFT_ROWS.iter()) {
        *dst = sbox(state[src]);
    }
    out
}

#[inline]
fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;
        col[0] = a0 ^ all ^ xtime(a0 ^ a1);
        col[1] = a1 ^ all ^ xtime(a1 ^ a2);
        col[2] = a2 ^ all ^ xtime(a2 ^ a3);
        col[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}

/// One full encryption round: ShiftRows, SubBytes, MixColumns, AddRoundKey.
#[inline]
pub fn encrypt_round(state: &Block, round_key: &Block) -> Block {
    let mut out = sub_shift(state);
    mix_columns(&mut out);
    xor_in_place(&mut out, round_key);
    out
}

/// The final encryption round, which skips MixColumns.
#[inline]
pub fn encrypt_last_round(state: &Block, round_key: &Block) -> Block {
    let mut out = sub_shift(state);
    xor_in_place(&mut out, round_key);
    out
}
