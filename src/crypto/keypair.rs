//! secp256k1 private key validation and public key derivation.

use std::fmt;

use secp256k1::constants::CURVE_ORDER;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::DeriveError;

/// Length of a raw private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of an uncompressed public key in bytes.
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Leading byte of an uncompressed public key.
pub const UNCOMPRESSED_PUBKEY_PREFIX: u8 = 0x04;

/// A validated secp256k1 private key scalar (32 bytes, big-endian).
///
/// The bytes are zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RawPrivateKey([u8; PRIVATE_KEY_LEN]);

impl RawPrivateKey {
    /// Wraps 32 big-endian bytes, rejecting 0 and values >= the curve order.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LEN]) -> Result<Self, DeriveError> {
        if !Self::is_valid_scalar(&bytes) {
            return Err(DeriveError::InvalidScalar);
        }
        Ok(Self(bytes))
    }

    /// Returns true if `bytes` is a scalar in `[1, n-1]`.
    ///
    /// Equal-length big-endian arrays compare lexicographically in numeric order.
    pub fn is_valid_scalar(bytes: &[u8; PRIVATE_KEY_LEN]) -> bool {
        bytes.iter().any(|&b| b != 0) && *bytes < CURVE_ORDER
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    /// Computes `scalar x G` on secp256k1.
    pub fn public_key(&self) -> Result<PublicKeyPoint, DeriveError> {
        let secp = Secp256k1::signing_only();
        let secret_key =
            SecretKey::from_slice(&self.0).map_err(|_| DeriveError::InvalidScalar)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(PublicKeyPoint::from_uncompressed(
            &public_key.serialize_uncompressed(),
        ))
    }
}

impl fmt::Debug for RawPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawPrivateKey(<redacted>)")
    }
}

/// An affine secp256k1 point with 32-byte big-endian coordinates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyPoint {
    x: [u8; 32],
    y: [u8; 32],
}

impl PublicKeyPoint {
    fn from_uncompressed(bytes: &[u8; UNCOMPRESSED_PUBKEY_LEN]) -> Self {
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..]);
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> &[u8; 32] {
        &self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> &[u8; 32] {
        &self.y
    }

    /// Serializes as `0x04 || x || y`.
    ///
    /// Coordinates are fixed-width, so values with leading zero bytes stay
    /// left-padded and the result is always 65 bytes.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBKEY_LEN] {
        let mut out = [0u8; UNCOMPRESSED_PUBKEY_LEN];
        out[0] = UNCOMPRESSED_PUBKEY_PREFIX;
        out[1..33].copy_from_slice(&self.x);
        out[33..].copy_from_slice(&self.y);
        out
    }
}

impl fmt::Debug for PublicKeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyPoint({})", hex::encode(self.to_uncompressed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(n: u64) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        bytes
    }

    #[test]
    fn test_scalar_one_is_generator() {
        let key = RawPrivateKey::from_bytes(scalar(1)).unwrap();
        let point = key.public_key().unwrap();
        assert_eq!(
            hex::encode(point.x()),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(point.y()),
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn test_uncompressed_layout() {
        let key = RawPrivateKey::from_bytes(scalar(1)).unwrap();
        let bytes = key.public_key().unwrap().to_uncompressed();
        assert_eq!(bytes.len(), UNCOMPRESSED_PUBKEY_LEN);
        assert_eq!(bytes[0], UNCOMPRESSED_PUBKEY_PREFIX);
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            RawPrivateKey::from_bytes([0u8; 32]),
            Err(DeriveError::InvalidScalar)
        );
    }

    #[test]
    fn test_curve_order_rejected() {
        assert_eq!(
            RawPrivateKey::from_bytes(CURVE_ORDER),
            Err(DeriveError::InvalidScalar)
        );
        assert_eq!(
            RawPrivateKey::from_bytes([0xff; 32]),
            Err(DeriveError::InvalidScalar)
        );
    }

    #[test]
    fn test_order_minus_one_accepted() {
        let mut bytes = CURVE_ORDER;
        bytes[31] -= 1;
        let key = RawPrivateKey::from_bytes(bytes).unwrap();
        let point = key.public_key().unwrap();
        // (n-1)G = -G shares x with G
        assert_eq!(
            hex::encode(point.x()),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(point.y()),
            "b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = RawPrivateKey::from_bytes(scalar(0xdead)).unwrap();
        let printed = format!("{:?}", key);
        assert!(!printed.contains("dead"));
        assert!(printed.contains("redacted"));
    }
}
