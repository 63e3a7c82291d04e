//! Base58 and base58-check encoding.
//!
//! Uses the Bitcoin alphabet. Leading zero bytes encode as leading `'1'`
//! characters. The checksum is the first four bytes of SHA-256d over
//! `version || payload`.

use super::hash::sha256d;

/// Length of the base58-check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Errors returned when checking a base58-check string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58Error {
    #[error("Invalid base58: {0}")]
    InvalidEncoding(String),

    #[error("Decoded data too short: {0} bytes")]
    TooShort(usize),

    #[error("Checksum mismatch")]
    ChecksumMismatch,
}

/// A decoded base58-check value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDecoded {
    /// The leading version (prefix) byte
    pub version: u8,
    /// The bytes between the version byte and the checksum
    pub payload: Vec<u8>,
    /// The trailing checksum
    pub checksum: [u8; CHECKSUM_LEN],
}

/// Encodes raw bytes to base58.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Returns the checksum of `data`: the first four bytes of SHA-256d.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Encodes `version || payload || checksum` to base58.
pub fn check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let sum = checksum(&data);
    data.extend_from_slice(&sum);

    let encoded = encode(&data);
    zeroize::Zeroize::zeroize(&mut data);
    encoded
}

/// Decodes a base58-check string and verifies its checksum.
pub fn check_decode(s: &str) -> Result<CheckDecoded, Base58Error> {
    let decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| Base58Error::InvalidEncoding(e.to_string()))?;

    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(Base58Error::TooShort(decoded.len()));
    }

    let (body, sum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if sum != checksum(body).as_slice() {
        return Err(Base58Error::ChecksumMismatch);
    }

    let mut checksum_bytes = [0u8; CHECKSUM_LEN];
    checksum_bytes.copy_from_slice(sum);

    Ok(CheckDecoded {
        version: body[0],
        payload: body[1..].to_vec(),
        checksum: checksum_bytes,
    })
}
