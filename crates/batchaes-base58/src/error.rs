//! Codec errors.

/// Errors returned when decoding Base58 or Base58Check text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58Error {
    /// The input contains a character outside the alphabet.
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character position in the input.
        index: usize,
    },
    /// The decoded bytes would exceed the caller's limit.
    #[error("decoded data exceeds {max_len} bytes")]
    TooLong {
        /// The limit that was exceeded.
        max_len: usize,
    },
    /// Base58Check data is too short to hold a payload and checksum.
    #[error("base58check data is {len} bytes, need at least 5")]
    TooShort {
        /// Decoded length including the checksum.
        len: usize,
    },
    /// The Base58Check checksum does not match the payload.
    #[error("base58check checksum mismatch")]
    ChecksumMismatch,
}
