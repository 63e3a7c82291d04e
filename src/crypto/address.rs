//! Address representation and encoding.

use std::fmt;

use super::base58;
use super::hash::hash160;
use super::PublicKeyPoint;

/// A base58-check address: `prefix || hash160(pubkey) || checksum`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedAddress {
    prefix: u8,
    hash: [u8; 20],
    encoded: String,
}

impl EncodedAddress {
    /// Encodes the address of an uncompressed public key.
    pub fn from_public_key(public_key: &PublicKeyPoint, prefix: u8) -> Self {
        Self::from_hash160(hash160(&public_key.to_uncompressed()), prefix)
    }

    /// Encodes an address from a precomputed hash160.
    pub fn from_hash160(hash: [u8; 20], prefix: u8) -> Self {
        Self {
            prefix,
            hash,
            encoded: base58::check_encode(prefix, &hash),
        }
    }

    /// Returns the network prefix byte.
    #[inline]
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Returns the RIPEMD-160(SHA-256(pubkey)) payload.
    #[inline]
    pub fn hash160(&self) -> &[u8; 20] {
        &self.hash
    }

    /// Returns the base58-check string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for EncodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedAddress({})", self.encoded)
    }
}

impl fmt::Display for EncodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}
