//! Two-phase encryption over many independent instances.

use core::borrow::Borrow;

use crate::backend::AesBackend;
use crate::block::Block;
use crate::cipher::encrypt_block;
use crate::key::RoundKeySchedule;
use crate::key_schedule::expand_key_into;

/// Shared body of [`AesBackend::encrypt_instances`].
///
/// Hardware backends call this from a function compiled with their target
/// features, so everything here has to inline into that caller.
#[inline(always)]
pub(crate) fn encrypt_instances<B, K>(
    backend: &B,
    keys: &[K],
    plaintexts: &[Block],
    ciphertexts: &mut [Block],
    scratch: &mut [RoundKeySchedule],
) where
    B: AesBackend,
    K: Borrow<[u8; 16]>,
{
    let n = keys.len();
    assert!(
        plaintexts.len() >= n && ciphertexts.len() >= n && scratch.len() >= n,
        "instance buffers are shorter than the {n} keys"
    );

    for (key, schedule) in keys.iter().zip(scratch.iter_mut()) {
        expand_key_into(backend, key, schedule);
    }
    for ((schedule, plaintext), ciphertext) in scratch[..n]
        .iter()
        .zip(plaintexts.iter())
        .zip(ciphertexts.iter_mut())
    {
        *ciphertext = encrypt_block(backend, schedule, plaintext);
    }
}
