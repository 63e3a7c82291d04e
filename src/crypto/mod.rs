//! Cryptographic operations for Bitcoin-style key and address generation.
//!
//! This module provides:
//! - secp256k1 private key validation and public key derivation
//! - SHA-256 / RIPEMD-160 hashing and base58-check encoding
//! - WIF private key export and address encoding

pub mod base58;
pub mod hash;

mod address;
mod keypair;
mod wif;

pub use address::EncodedAddress;
pub use keypair::{
    PublicKeyPoint, RawPrivateKey, PRIVATE_KEY_LEN, UNCOMPRESSED_PUBKEY_LEN,
    UNCOMPRESSED_PUBKEY_PREFIX,
};
pub use wif::EncodedPrivateKey;

/// Errors that can occur while deriving an address and private key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid scalar: private key must be in [1, n-1] for secp256k1")]
    InvalidScalar,
}
