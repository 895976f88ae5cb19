//! Software backend.

use crate::block::{xor_in_place, Block};
use crate::round::{encrypt_last_round, encrypt_round};

use super::{AesBackend, BackendKind};

/// Table-based AES usable on any target.
///
/// Lookups are data-dependent, so this backend is not constant-time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Portable;

impl AesBackend for Portable {
    type Register = Block;

    const KIND: BackendKind = BackendKind::Portable;

    #[inline]
    fn load_block(&self, block: &Block) -> Block {
        *block
    }

    #[inline]
    fn store_block(&self, value: Block) -> Block {
        value
    }

    #[inline]
    fn aes_round(&self, state: Block, round_key: Block) -> Block {
        encrypt_round(&state, &round_key)
    }

    #[inline]
    fn aes_last_round(&self, state: Block, round_key: Block) -> Block {
        encrypt_last_round(&state, &round_key)
    }

    #[inline]
    fn xor(&self, mut a: Block, b: Block) -> Block {
        xor_in_place(&mut a, &b);
        a
    }

    #[inline]
    fn shuffle_bytes(&self, value: Block, mask: Block) -> Block {
        let mut out = [0u8; 16];
        for (dst, &m) in out.iter_mut().zip(mask.iter()) {
            if m & 0x80 == 0 {
                *dst = value[(m & 0x0f) as usize];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_selects_and_zeroes() {
        let value: Block = core::array::from_fn(|i| i as u8 + 1);
        let mask = [
            0x80, 0x80, 0x80, 0x80, 0, 1, 2, 3, 0x80, 0x80, 0x80, 0x80, 8, 9, 10, 11,
        ];
        let out = Portable.shuffle_bytes(value, mask);
        assert_eq!(out, [0, 0, 0, 0, 1, 2, 3, 4, 0, 0, 0, 0, 9, 10, 11, 12]);
    }

    #[test]
    fn fips_round_one() {
        // FIPS-197 appendix B, round 1: start state and round key 1 -> round 2 start.
        let state = hex_block("193de3bea0f4e22b9ac68d2ae9f84808");
        let round_key = hex_block("a0fafe1788542cb123a339392a6c7605");
        let expected = hex_block("a49c7ff2689f352b6b5bea43026a5049");
        assert_eq!(Portable.aes_round(state, round_key), expected);
    }

    fn hex_block(s: &str) -> Block {
        let bytes = hex::decode(s).expect("valid hex");
        let mut block = [0u8; 16];
        block.copy_from_slice(&bytes);
        block
    }
}
