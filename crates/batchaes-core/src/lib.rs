//! AES-128 building blocks for batched, many-key encryption.
//!
//! This crate provides:
//! - [`AesBackend`], a small set of 128-bit register operations (one AES round,
//!   one final round, xor, byte shuffle) with a portable implementation and
//!   hardware implementations for x86 (AES-NI) and aarch64 (ARMv8 AES).
//! - The AES-128 key schedule written against that interface.
//! - Single-block encryption and the shared key and block types.
//!
//! Hardware backends are picked once, at initialization, from the CPU's
//! capabilities. See [`Backend::detect`].

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod backend;
mod batch;
mod block;
mod cipher;
mod key;
mod key_schedule;
mod round;
mod sbox;

#[cfg(target_arch = "aarch64")]
pub use crate::backend::ArmAes;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use crate::backend::AesNi;
pub use crate::backend::{AesBackend, Backend, BackendKind, Portable};
pub use crate::block::{block_from_slice, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, Aes128};
pub use crate::key::{MasterKey, RoundKeySchedule, ROUNDS, SCHEDULE_LEN};
pub use crate::key_schedule::{expand_key, expand_key_into, RCON};
pub use crate::sbox::sbox;
