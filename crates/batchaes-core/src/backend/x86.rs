//! AES-NI backend for x86 and x86_64.
//!
//! The register operations are `#[inline(always)]` wrappers. Batches enter
//! through `encrypt_instances_aes_ni`, which is compiled with AES-NI and
//! SSSE3 enabled, so the intrinsics inline into the key schedule and round
//! loops without any global `target-feature` flags.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use core::borrow::Borrow;

use crate::batch;
use crate::block::Block;
use crate::key::RoundKeySchedule;

use super::{AesBackend, BackendKind};

/// Proof that the running CPU supports AES-NI, SSE2 and SSSE3.
#[derive(Clone, Copy, Debug)]
pub struct AesNi {
    _private: (),
}

impl AesNi {
    /// Returns the backend if the CPU has the required instruction sets.
    pub fn new() -> Option<Self> {
        if is_x86_feature_detected!("aes")
            && is_x86_feature_detected!("sse2")
            && is_x86_feature_detected!("ssse3")
        {
            Some(Self { _private: () })
        } else {
            None
        }
    }
}

// SAFETY (all blocks below): an `AesNi` value only exists after `new` confirmed
// AES-NI, SSE2 and SSSE3. Loads and stores touch exactly 16 bytes of a `Block`.
impl AesBackend for AesNi {
    type Register = __m128i;

    const KIND: BackendKind = BackendKind::AesNi;

    #[inline(always)]
    fn load_block(&self, block: &Block) -> __m128i {
        unsafe { _mm_loadu_si128(block.as_ptr() as *const __m128i) }
    }

    #[inline(always)]
    fn store_block(&self, value: __m128i) -> Block {
        let mut out = [0u8; 16];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, value) };
        out
    }

    #[inline(always)]
    fn aes_round(&self, state: __m128i, round_key: __m128i) -> __m128i {
        unsafe { _mm_aesenc_si128(state, round_key) }
    }

    #[inline(always)]
    fn aes_last_round(&self, state: __m128i, round_key: __m128i) -> __m128i {
        unsafe { _mm_aesenclast_si128(state, round_key) }
    }

    #[inline(always)]
    fn xor(&self, a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_xor_si128(a, b) }
    }

    #[inline(always)]
    fn shuffle_bytes(&self, value: __m128i, mask: __m128i) -> __m128i {
        unsafe { _mm_shuffle_epi8(value, mask) }
    }

    #[inline]
    fn encrypt_instances<K: Borrow<[u8; 16]>>(
        &self,
        keys: &[K],
        plaintexts: &[Block],
        ciphertexts: &mut [Block],
        scratch: &mut [RoundKeySchedule],
    ) {
        unsafe { encrypt_instances_aes_ni(self, keys, plaintexts, ciphertexts, scratch) }
    }
}

/// Batch loop compiled for AES-NI.
///
/// # Safety
///
/// The CPU must support AES-NI, SSE2 and SSSE3. Holding an [`AesNi`] proves it.
#[inline]
#[target_feature(enable = "aes,sse2,ssse3")]
unsafe fn encrypt_instances_aes_ni<K: Borrow<[u8; 16]>>(
    backend: &AesNi,
    keys: &[K],
    plaintexts: &[Block],
    ciphertexts: &mut [Block],
    scratch: &mut [RoundKeySchedule],
) {
    batch::encrypt_instances(backend, keys, plaintexts, ciphertexts, scratch)
}
