//! Entropy sources for private key generation.

use std::collections::VecDeque;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::crypto::hash::sha256;
use crate::crypto::{DeriveError, PRIVATE_KEY_LEN};

/// A source of 32-byte private key candidates.
pub trait EntropySource {
    /// Fills `buf` with fresh entropy.
    fn fill(&mut self, buf: &mut [u8; PRIVATE_KEY_LEN]) -> Result<(), DeriveError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, buf: &mut [u8; PRIVATE_KEY_LEN]) -> Result<(), DeriveError> {
        (**self).fill(buf)
    }
}

/// The operating system's cryptographically secure RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8; PRIVATE_KEY_LEN]) -> Result<(), DeriveError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| DeriveError::EntropyUnavailable(e.to_string()))
    }
}

/// Replays a fixed queue of values, then reports exhaustion.
///
/// Deterministic: only for tests and reproducible demos.
#[derive(Default)]
pub struct FixedEntropy {
    values: VecDeque<[u8; PRIVATE_KEY_LEN]>,
}

impl FixedEntropy {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = [u8; PRIVATE_KEY_LEN]>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Creates a source yielding a single value.
    pub fn single(value: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self::new([value])
    }

    /// Creates a "brainwallet" source yielding SHA-256 of `passphrase`.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::single(sha256(passphrase.as_bytes()))
    }

    /// Returns the number of values left.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&mut self, buf: &mut [u8; PRIVATE_KEY_LEN]) -> Result<(), DeriveError> {
        let mut value = self
            .values
            .pop_front()
            .ok_or_else(|| DeriveError::EntropyUnavailable("fixed entropy exhausted".into()))?;
        buf.copy_from_slice(&value);
        value.zeroize();
        Ok(())
    }
}

impl Drop for FixedEntropy {
    fn drop(&mut self) {
        self.values.iter_mut().for_each(|v| v.zeroize());
    }
}
