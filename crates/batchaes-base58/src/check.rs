//! Base58Check: Base58 with a four-byte double SHA-256 checksum.

use sha2::{Digest, Sha256};

use crate::decode::decode;
use crate::encode::encode;
use crate::error::Base58Error;

/// Length of the appended checksum.
pub const CHECKSUM_LEN: usize = 4;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Encodes `payload` followed by its checksum.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decodes Base58Check `input` and returns the payload without its checksum.
///
/// `max_len` limits the payload; the checksum does not count against it. The
/// payload must be at least one byte.
pub fn decode_check(input: &str, max_len: usize) -> Result<Vec<u8>, Base58Error> {
    let mut data = decode(input, max_len.saturating_add(CHECKSUM_LEN)).map_err(|e| match e {
        Base58Error::TooLong { .. } => Base58Error::TooLong { max_len },
        other => other,
    })?;
    if data.len() <= CHECKSUM_LEN {
        return Err(Base58Error::TooShort { len: data.len() });
    }

    let split = data.len() - CHECKSUM_LEN;
    if checksum(&data[..split]) != data[split..] {
        return Err(Base58Error::ChecksumMismatch);
    }
    data.truncate(split);
    Ok(data)
}
