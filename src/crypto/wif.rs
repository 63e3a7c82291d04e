//! Wallet Import Format (WIF) private key export.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::base58;
use super::RawPrivateKey;

/// A base58-check private key export: `prefix || key || checksum`.
///
/// Uncompressed form: no compression flag byte follows the key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EncodedPrivateKey {
    prefix: u8,
    encoded: String,
}

impl EncodedPrivateKey {
    /// Encodes a raw private key under the given WIF prefix.
    pub fn encode(key: &RawPrivateKey, prefix: u8) -> Self {
        Self {
            prefix,
            encoded: base58::check_encode(prefix, key.as_bytes()),
        }
    }

    /// Returns the WIF prefix byte.
    #[inline]
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Returns the encoded secret.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for EncodedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPrivateKey(prefix={:#04x}, <redacted>)", self.prefix)
    }
}

impl fmt::Display for EncodedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}
