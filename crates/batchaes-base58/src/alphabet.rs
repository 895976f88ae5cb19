//! The Base58 alphabet and its reverse lookup.

/// The 58 symbols in digit order.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

const DIGITS: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Digit value of `c`, or `None` if it is not in the alphabet.
#[inline]
pub(crate) fn digit(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DIGITS[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// `len * num / den` rounded down, saturating instead of overflowing.
///
/// Multiplying only the quotient and remainder of `len / den` keeps the
/// estimate exact for every input length, 32-bit targets included.
pub(crate) const fn scale_len(len: usize, num: usize, den: usize) -> usize {
    (len / den)
        .saturating_mul(num)
        .saturating_add(len % den * num / den)
}
