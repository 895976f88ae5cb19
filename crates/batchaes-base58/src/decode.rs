//! Base58 decoding.

use crate::alphabet::{digit, scale_len, ALPHABET};
use crate::error::Base58Error;

/// Decodes Base58 `input`, producing at most `max_len` bytes.
///
/// Fails on any character outside the alphabet, including whitespace, and
/// as soon as the output would grow past `max_len`.
pub fn decode(input: &str, max_len: usize) -> Result<Vec<u8>, Base58Error> {
    let zero_symbol = ALPHABET[0] as char;
    let zeroes = input.chars().take_while(|&c| c == zero_symbol).count();
    if zeroes > max_len {
        return Err(Base58Error::TooLong { max_len });
    }

    // Leading symbols are all ASCII, so `zeroes` is also a byte offset.
    let digits = &input[zeroes..];
    // log(58) / log(256) < 0.733. Each digit adds at most one byte, so
    // `max_len - zeroes + 1` bytes are enough to see the limit exceeded.
    let size = scale_len(digits.len(), 733, 1000)
        .saturating_add(1)
        .min((max_len - zeroes).saturating_add(1));
    let mut b256 = vec![0u8; size];
    let mut length = 0;

    for (offset, c) in digits.chars().enumerate() {
        let value = digit(c).ok_or(Base58Error::InvalidCharacter {
            character: c,
            index: zeroes + offset,
        })?;

        let mut carry = u32::from(value);
        let mut i = 0;
        for byte in b256.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 58 * u32::from(*byte);
            *byte = (carry % 256) as u8;
            carry /= 256;
            i += 1;
        }
        debug_assert_eq!(carry, 0);
        length = i;

        if zeroes + length > max_len {
            return Err(Base58Error::TooLong { max_len });
        }
    }

    let mut out = Vec::with_capacity(zeroes + length);
    out.resize(zeroes, 0);
    out.extend(b256[size - length..].iter().skip_while(|&&b| b == 0));
    Ok(out)
}
