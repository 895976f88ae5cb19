//! 128-bit vector primitives the cipher is written against.
//!
//! [`AesBackend`] is implemented by a portable software backend and, where the
//! target architecture has them, by hardware AES backends. Hardware backends
//! are tokens: a value can only be obtained after a successful CPU capability
//! check, which is what makes their safe methods sound.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::key::RoundKeySchedule;

#[cfg(target_arch = "aarch64")]
mod aarch64;
mod portable;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;

#[cfg(target_arch = "aarch64")]
pub use aarch64::ArmAes;
pub use portable::Portable;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use x86::AesNi;

/// Register-level AES operations.
///
/// Round semantics follow the x86 `AESENC`/`AESENCLAST` instructions.
pub trait AesBackend: Copy + Send + Sync + fmt::Debug {
    /// The 128-bit register type operated on.
    type Register: Copy;

    /// Which implementation this is.
    const KIND: BackendKind;

    /// Loads a block into a register.
    fn load_block(&self, block: &Block) -> Self::Register;

    /// Stores a register into a block.
    fn store_block(&self, value: Self::Register) -> Block;

    /// ShiftRows, SubBytes, MixColumns, then xor with `round_key`.
    fn aes_round(&self, state: Self::Register, round_key: Self::Register) -> Self::Register;

    /// ShiftRows, SubBytes, then xor with `round_key`.
    fn aes_last_round(&self, state: Self::Register, round_key: Self::Register)
        -> Self::Register;

    /// Bitwise xor.
    fn xor(&self, a: Self::Register, b: Self::Register) -> Self::Register;

    /// Byte shuffle with `PSHUFB` semantics for the masks this crate uses:
    /// a mask byte below 16 selects that byte of `value`, a mask byte with the
    /// high bit set produces zero. Other mask values are unspecified.
    fn shuffle_bytes(&self, value: Self::Register, mask: Self::Register) -> Self::Register;

    /// Runs both batch phases over `keys.len()` instances: expands `keys[i]`
    /// into `scratch[i]`, then encrypts `plaintexts[i]` into `ciphertexts[i]`.
    ///
    /// Hardware backends override this to compile the whole loop with their
    /// target features enabled.
    ///
    /// # Panics
    ///
    /// Panics if `plaintexts`, `ciphertexts` or `scratch` is shorter than `keys`.
    fn encrypt_instances<K: Borrow<[u8; 16]>>(
        &self,
        keys: &[K],
        plaintexts: &[Block],
        ciphertexts: &mut [Block],
        scratch: &mut [RoundKeySchedule],
    ) {
        crate::batch::encrypt_instances(self, keys, plaintexts, ciphertexts, scratch)
    }

    /// Same as [`AesBackend::KIND`], callable on a value.
    fn kind(&self) -> BackendKind {
        Self::KIND
    }
}

/// Identifies an [`AesBackend`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Table-based software AES.
    Portable,
    /// x86 AES-NI with SSSE3.
    AesNi,
    /// ARMv8 cryptography extension.
    ArmAes,
}

impl BackendKind {
    /// Whether this kind uses hardware AES instructions.
    pub fn is_native(self) -> bool {
        !matches!(self, BackendKind::Portable)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Portable => "portable",
            BackendKind::AesNi => "aes-ni",
            BackendKind::ArmAes => "arm-aes",
        };
        f.write_str(name)
    }
}

/// A backend selected at initialization.
///
/// Dispatch into generic code with [`with_backend!`](crate::with_backend).
#[derive(Clone, Copy, Debug)]
pub enum Backend {
    /// Software fallback.
    Portable(Portable),
    /// x86 AES-NI.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    AesNi(AesNi),
    /// ARMv8 AES.
    #[cfg(target_arch = "aarch64")]
    ArmAes(ArmAes),
}

impl Backend {
    /// The software backend, available on every target.
    pub const fn portable() -> Self {
        Backend::Portable(Portable)
    }

    /// The hardware backend for this target, if the CPU supports it.
    pub fn native() -> Option<Self> {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            AesNi::new().map(Backend::AesNi)
        }
        #[cfg(target_arch = "aarch64")]
        {
            ArmAes::new().map(Backend::ArmAes)
        }
        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
        {
            None
        }
    }

    /// The hardware backend if available, otherwise the portable one.
    pub fn detect() -> Self {
        let backend = Self::native().unwrap_or_else(Self::portable);
        tracing::debug!(backend = %backend.kind(), "selected AES backend");
        backend
    }

    /// Which implementation is active.
    pub fn kind(&self) -> BackendKind {
        crate::with_backend!(self, |b| b.kind())
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::detect()
    }
}

/// Runs `$body` with `$b` bound to the concrete backend inside a [`Backend`].
///
/// ```
/// use batchaes_core::{with_backend, AesBackend, Backend};
///
/// let backend = Backend::portable();
/// let kind = with_backend!(&backend, |b| b.kind());
/// assert_eq!(kind, backend.kind());
/// ```
#[macro_export]
macro_rules! with_backend {
    ($backend:expr, |$b:ident| $body:expr) => {
        match *$backend {
            $crate::Backend::Portable(ref $b) => $body,
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            $crate::Backend::AesNi(ref $b) => $body,
            #[cfg(target_arch = "aarch64")]
            $crate::Backend::ArmAes(ref $b) => $body,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_block(rng: &mut impl RngCore) -> Block {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        block
    }

    fn check_against_portable<B: AesBackend>(backend: B) {
        let portable = Portable;
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        let masks: [Block; 3] = [
            [13, 14, 15, 12, 13, 14, 15, 12, 13, 14, 15, 12, 13, 14, 15, 12],
            [0x80, 0x80, 0x80, 0x80, 0, 1, 2, 3, 0x80, 0x80, 0x80, 0x80, 8, 9, 10, 11],
            [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        ];
        for _ in 0..64 {
            let a = random_block(&mut rng);
            let b = random_block(&mut rng);
            let (na, nb) = (backend.load_block(&a), backend.load_block(&b));
            let (pa, pb) = (portable.load_block(&a), portable.load_block(&b));

            assert_eq!(backend.store_block(na), a);
            assert_eq!(
                backend.store_block(backend.aes_round(na, nb)),
                portable.store_block(portable.aes_round(pa, pb))
            );
            assert_eq!(
                backend.store_block(backend.aes_last_round(na, nb)),
                portable.store_block(portable.aes_last_round(pa, pb))
            );
            assert_eq!(
                backend.store_block(backend.xor(na, nb)),
                portable.store_block(portable.xor(pa, pb))
            );
            for mask in &masks {
                assert_eq!(
                    backend.store_block(backend.shuffle_bytes(na, backend.load_block(mask))),
                    portable.store_block(portable.shuffle_bytes(pa, portable.load_block(mask)))
                );
            }
        }
    }

    #[test]
    fn native_backend_agrees_with_portable() {
        match Backend::detect() {
            Backend::Portable(_) => {}
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Backend::AesNi(b) => check_against_portable(b),
            #[cfg(target_arch = "aarch64")]
            Backend::ArmAes(b) => check_against_portable(b),
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(Backend::portable().kind(), BackendKind::Portable);
        assert_eq!(BackendKind::AesNi.to_string(), "aes-ni");
        assert!(!BackendKind::Portable.is_native());
        if let Some(native) = Backend::native() {
            assert!(native.kind().is_native());
        }
    }
}
