//! Network version bytes for addresses and WIF private keys.

use std::fmt;
use std::str::FromStr;

/// Address and WIF prefix bytes used for one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefixes {
    /// Version byte prepended to the hash160
    pub address: u8,
    /// Version byte prepended to the raw private key
    pub wif: u8,
}

impl Prefixes {
    pub const fn new(address: u8, wif: u8) -> Self {
        Self { address, wif }
    }
}

impl Default for Prefixes {
    fn default() -> Self {
        Network::default().prefixes()
    }
}

/// Preset prefix pairs for common networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// Bitcoin mainnet (also valid for BCH legacy addresses)
    #[default]
    Bitcoin,
    /// Bitcoin testnet / signet / regtest
    Testnet,
    Litecoin,
    Dogecoin,
}

impl Network {
    /// Returns the preset prefixes.
    pub const fn prefixes(self) -> Prefixes {
        match self {
            Network::Bitcoin => Prefixes::new(0x00, 0x80),
            Network::Testnet => Prefixes::new(0x6f, 0xef),
            Network::Litecoin => Prefixes::new(0x30, 0xb0),
            Network::Dogecoin => Prefixes::new(0x1e, 0x9e),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bitcoin" | "btc" | "mainnet" | "bch" => Ok(Network::Bitcoin),
            "testnet" | "test" | "tbtc" => Ok(Network::Testnet),
            "litecoin" | "ltc" => Ok(Network::Litecoin),
            "dogecoin" | "doge" => Ok(Network::Dogecoin),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Bitcoin => write!(f, "bitcoin"),
            Network::Testnet => write!(f, "testnet"),
            Network::Litecoin => write!(f, "litecoin"),
            Network::Dogecoin => write!(f, "dogecoin"),
        }
    }
}

/// Parses a prefix byte written in decimal (`128`) or hex (`0x80`).
pub fn parse_prefix_byte(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex_digits) => u8::from_str_radix(hex_digits, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("Invalid prefix byte '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bitcoin_mainnet() {
        assert_eq!(Prefixes::default(), Prefixes::new(0x00, 0x80));
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("BTC".parse::<Network>(), Ok(Network::Bitcoin));
        assert_eq!("testnet".parse::<Network>(), Ok(Network::Testnet));
        assert_eq!("ltc".parse::<Network>(), Ok(Network::Litecoin));
        assert!("monero".parse::<Network>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for network in [
            Network::Bitcoin,
            Network::Testnet,
            Network::Litecoin,
            Network::Dogecoin,
        ] {
            assert_eq!(network.to_string().parse::<Network>(), Ok(network));
        }
    }

    #[test]
    fn test_parse_prefix_byte() {
        assert_eq!(parse_prefix_byte("0x80"), Ok(0x80));
        assert_eq!(parse_prefix_byte("0X6F"), Ok(0x6f));
        assert_eq!(parse_prefix_byte("48"), Ok(0x30));
        assert!(parse_prefix_byte("256").is_err());
        assert!(parse_prefix_byte("0xzz").is_err());
    }
}
