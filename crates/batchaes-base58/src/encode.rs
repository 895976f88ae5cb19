//! Base58 encoding.

use crate::alphabet::{scale_len, ALPHABET};

/// Encodes `input` as Base58.
///
/// Empty input encodes to the empty string.
pub fn encode(input: &[u8]) -> String {
    let zeroes = input.iter().take_while(|&&b| b == 0).count();
    let digits = to_base58_digits(&input[zeroes..]);

    let mut out = String::with_capacity(zeroes + digits.len());
    out.extend(std::iter::repeat(ALPHABET[0] as char).take(zeroes));
    out.extend(digits.iter().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Converts big-endian base-256 bytes to big-endian base-58 digits without
/// leading zero digits.
fn to_base58_digits(bytes: &[u8]) -> Vec<u8> {
    // log(256) / log(58) < 1.38
    let size = scale_len(bytes.len(), 138, 100).saturating_add(1);
    let mut b58 = vec![0u8; size];
    let mut length = 0;

    for &byte in bytes {
        let mut carry = u32::from(byte);
        let mut i = 0;
        for digit in b58.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 256 * u32::from(*digit);
            *digit = (carry % 58) as u8;
            carry /= 58;
            i += 1;
        }
        debug_assert_eq!(carry, 0);
        length = i;
    }

    let start = b58[size - length..]
        .iter()
        .position(|&d| d != 0)
        .map_or(size, |p| size - length + p);
    b58.split_off(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn leading_zeroes_become_ones() {
        assert_eq!(encode(&[0, 0, 1]), "112");
        assert_eq!(encode(&[0; 4]), "1111");
    }

    #[test]
    fn single_bytes() {
        assert_eq!(encode(&[57]), "z");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[0xff]), "5Q");
    }
}
