//! Engine errors.

/// Errors raised while constructing a [`BatchEncryptor`](crate::BatchEncryptor).
///
/// Encryption itself has no error path: size mismatches are caller bugs and
/// panic.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Hardware AES was required but the CPU or target does not provide it.
    #[error("native AES acceleration is not available on this CPU")]
    NativeUnavailable,
}
