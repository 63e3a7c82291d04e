//! Entropy to (address, WIF) derivation pipeline.

use zeroize::Zeroizing;

use crate::crypto::{
    DeriveError, EncodedAddress, EncodedPrivateKey, RawPrivateKey, PRIVATE_KEY_LEN,
};
use crate::entropy::{EntropySource, OsEntropy};
use crate::network::{Network, Prefixes};

/// Default number of entropy draws before giving up on invalid scalars.
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// A derived address and its private key export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    address: EncodedAddress,
    private_key: EncodedPrivateKey,
}

impl DerivedKey {
    /// Returns the encoded address.
    pub fn address(&self) -> &EncodedAddress {
        &self.address
    }

    /// Returns the WIF private key export.
    pub fn private_key(&self) -> &EncodedPrivateKey {
        &self.private_key
    }

    /// Returns the prefixes this pair was encoded with.
    pub fn prefixes(&self) -> Prefixes {
        Prefixes::new(self.address.prefix(), self.private_key.prefix())
    }
}

/// Derives the address and WIF for a fixed 32-byte entropy value.
///
/// Deterministic. Returns `InvalidScalar` for 0 or values >= the curve order.
pub fn derive_from_entropy(
    entropy: &[u8; PRIVATE_KEY_LEN],
    prefixes: Prefixes,
) -> Result<DerivedKey, DeriveError> {
    let key = RawPrivateKey::from_bytes(*entropy)?;
    let public_key = key.public_key()?;

    Ok(DerivedKey {
        private_key: EncodedPrivateKey::encode(&key, prefixes.wif),
        address: EncodedAddress::from_public_key(&public_key, prefixes.address),
    })
}

/// Generates fresh key material and encodes it.
///
/// Each call draws new entropy; nothing is cached between calls.
#[derive(Debug)]
pub struct KeyAddressDeriver<E = OsEntropy> {
    source: E,
    max_attempts: usize,
}

impl KeyAddressDeriver<OsEntropy> {
    /// Creates a deriver backed by the OS RNG.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for KeyAddressDeriver<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> KeyAddressDeriver<E> {
    /// Creates a deriver with an injected entropy source.
    pub fn with_source(source: E) -> Self {
        Self {
            source,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many draws are made before an invalid scalar is reported.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Derives a fresh `(address, WIF)` pair.
    ///
    /// Entropy that is not a valid scalar is discarded and redrawn. Source
    /// failures are returned immediately.
    pub fn derive(&mut self, address_prefix: u8, wif_prefix: u8) -> Result<DerivedKey, DeriveError> {
        let prefixes = Prefixes::new(address_prefix, wif_prefix);
        let mut entropy = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);

        for _ in 0..self.max_attempts {
            self.source.fill(&mut entropy)?;
            match derive_from_entropy(&entropy, prefixes) {
                Err(DeriveError::InvalidScalar) => continue,
                result => return result,
            }
        }

        Err(DeriveError::InvalidScalar)
    }

    /// Derives a fresh pair using a network's preset prefixes.
    pub fn derive_for(&mut self, network: Network) -> Result<DerivedKey, DeriveError> {
        let prefixes = network.prefixes();
        self.derive(prefixes.address, prefixes.wif)
    }

    /// Consumes the deriver, returning its entropy source.
    pub fn into_source(self) -> E {
        self.source
    }
}
