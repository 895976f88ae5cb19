//! ARMv8 cryptography extension backend.
//!
//! Batches enter through `encrypt_instances_arm_aes`, compiled with the AES
//! extension enabled so the `#[inline(always)]` register operations inline.

#![allow(unsafe_code)]

use core::arch::aarch64::*;

use core::borrow::Borrow;

use crate::batch;
use crate::block::Block;
use crate::key::RoundKeySchedule;

use super::{AesBackend, BackendKind};

/// Proof that the running CPU implements the ARMv8 AES instructions.
#[derive(Clone, Copy, Debug)]
pub struct ArmAes {
    _private: (),
}

impl ArmAes {
    /// Returns the backend if the CPU has the AES extension.
    pub fn new() -> Option<Self> {
        if std::arch::is_aarch64_feature_detected!("aes") {
            Some(Self { _private: () })
        } else {
            None
        }
    }
}

// AESE xors the round key before SubBytes/ShiftRows, so the x86 round order is
// recovered by passing a zero key to AESE and xoring the real key afterwards.
//
// SAFETY (all blocks below): an `ArmAes` value only exists after `new`
// confirmed the AES extension; NEON is mandatory on aarch64. Loads and stores
// touch exactly 16 bytes of a `Block`.
impl AesBackend for ArmAes {
    type Register = uint8x16_t;

    const KIND: BackendKind = BackendKind::ArmAes;

    #[inline(always)]
    fn load_block(&self, block: &Block) -> uint8x16_t {
        unsafe { vld1q_u8(block.as_ptr()) }
    }

    #[inline(always)]
    fn store_block(&self, value: uint8x16_t) -> Block {
        let mut out = [0u8; 16];
        unsafe { vst1q_u8(out.as_mut_ptr(), value) };
        out
    }

    #[inline(always)]
    fn aes_round(&self, state: uint8x16_t, round_key: uint8x16_t) -> uint8x16_t {
        unsafe { veorq_u8(vaesmcq_u8(vaeseq_u8(state, vdupq_n_u8(0))), round_key) }
    }

    #[inline(always)]
    fn aes_last_round(&self, state: uint8x16_t, round_key: uint8x16_t) -> uint8x16_t {
        unsafe { veorq_u8(vaeseq_u8(state, vdupq_n_u8(0)), round_key) }
    }

    #[inline(always)]
    fn xor(&self, a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
        unsafe { veorq_u8(a, b) }
    }

    #[inline(always)]
    fn shuffle_bytes(&self, value: uint8x16_t, mask: uint8x16_t) -> uint8x16_t {
        // TBL zeroes lanes whose index is out of range, which covers 0x80.
        unsafe { vqtbl1q_u8(value, mask) }
    }

    #[inline]
    fn encrypt_instances<K: Borrow<[u8; 16]>>(
        &self,
        keys: &[K],
        plaintexts: &[Block],
        ciphertexts: &mut [Block],
        scratch: &mut [RoundKeySchedule],
    ) {
        unsafe { encrypt_instances_arm_aes(self, keys, plaintexts, ciphertexts, scratch) }
    }
}

/// Batch loop compiled for the ARMv8 AES extension.
///
/// # Safety
///
/// The CPU must implement the AES extension. Holding an [`ArmAes`] proves it.
#[inline]
#[target_feature(enable = "aes")]
unsafe fn encrypt_instances_arm_aes<K: Borrow<[u8; 16]>>(
    backend: &ArmAes,
    keys: &[K],
    plaintexts: &[Block],
    ciphertexts: &mut [Block],
    scratch: &mut [RoundKeySchedule],
) {
    batch::encrypt_instances(backend, keys, plaintexts, ciphertexts, scratch)
}
