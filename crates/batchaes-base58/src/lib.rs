//! Base58 and Base58Check encoding.
//!
//! Base58 renders bytes as a big-endian number in base 58 over an alphabet
//! without the look-alike glyphs `0`, `O`, `I` and `l`. Each leading zero byte
//! becomes one leading `1`. Base58Check appends the first four bytes of
//! `SHA-256(SHA-256(payload))` before encoding so transcription errors are
//! detected on decode.
//!
//! ```
//! let text = batchaes_base58::encode(&[0, 0, 1]);
//! assert_eq!(text, "112");
//! assert_eq!(batchaes_base58::decode(&text, 3).unwrap(), vec![0, 0, 1]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod check;
mod decode;
mod encode;
mod error;

pub use alphabet::ALPHABET;
pub use check::{decode_check, encode_check, CHECKSUM_LEN};
pub use decode::decode;
pub use encode::encode;
pub use error::Base58Error;
