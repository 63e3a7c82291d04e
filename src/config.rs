//! Runtime configuration for the address generator.

use std::time::Duration;

use clap::Parser;

use crate::network::{parse_prefix_byte, Network, Prefixes};
use crate::output::{DisplayGeometry, DisplaySettings, OutputMode, MAX_FIELD_LEN};

/// Bitcoin-style address and WIF private key generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Network preset: bitcoin, testnet, litecoin, or dogecoin
    #[arg(short = 'n', long, default_value = "bitcoin")]
    pub network: Network,

    /// Address version byte (decimal or 0x-hex), overrides the network preset
    #[arg(long, value_parser = parse_prefix_byte)]
    pub address_prefix: Option<u8>,

    /// WIF version byte (decimal or 0x-hex), overrides the network preset
    #[arg(long, value_parser = parse_prefix_byte)]
    pub wif_prefix: Option<u8>,

    /// Output surface: serial, display, or both
    #[arg(short = 'o', long, default_value = "serial")]
    pub output: OutputMode,

    /// Number of independent address/key pairs to generate
    #[arg(short = 'c', long, default_value = "1")]
    pub count: usize,

    /// Seconds each display screen is held
    #[arg(short = 'i', long, default_value = "60")]
    pub interval: u64,

    /// Display rotations per pair (0 = until Ctrl+C)
    #[arg(long, default_value = "0")]
    pub cycles: usize,

    /// Display width in characters
    #[arg(long, default_value = "20")]
    pub cols: usize,

    /// Display height in lines
    #[arg(long, default_value = "4")]
    pub rows: usize,

    /// Derive from SHA-256 of a passphrase instead of the OS RNG (demo only)
    #[arg(long)]
    pub brainwallet: Option<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount("Count must be at least 1".into()));
        }

        if self.brainwallet.is_some() && self.count > 1 {
            return Err(ConfigError::InvalidCount(
                "A brainwallet passphrase yields exactly one key; use --count 1".into(),
            ));
        }

        if let Some(ref passphrase) = self.brainwallet {
            if passphrase.is_empty() {
                return Err(ConfigError::InvalidEntropy(
                    "Brainwallet passphrase cannot be empty".into(),
                ));
            }
        }

        if self.output.uses_display() {
            if self.interval == 0 {
                return Err(ConfigError::InvalidDisplay(
                    "Interval must be at least 1 second".into(),
                ));
            }

            let geometry = DisplayGeometry {
                cols: self.cols,
                rows: self.rows,
            };
            if !geometry.fits(MAX_FIELD_LEN) {
                return Err(ConfigError::InvalidDisplay(format!(
                    "A {}x{} display cannot show a {}-character key below its heading",
                    self.cols, self.rows, MAX_FIELD_LEN
                )));
            }

            if self.cycles == 0 && self.count > 1 {
                return Err(ConfigError::InvalidDisplay(
                    "Showing more than one pair on the display requires --cycles > 0".into(),
                ));
            }
        }

        Ok(())
    }

    /// Returns the effective prefixes: the network preset with any overrides applied
    pub fn prefixes(&self) -> Prefixes {
        let preset = self.network.prefixes();
        Prefixes::new(
            self.address_prefix.unwrap_or(preset.address),
            self.wif_prefix.unwrap_or(preset.wif),
        )
    }

    /// Returns true if either prefix was overridden
    pub fn has_custom_prefixes(&self) -> bool {
        self.address_prefix.is_some() || self.wif_prefix.is_some()
    }

    /// Returns the display settings
    pub fn display_settings(&self, clear_screen: bool) -> DisplaySettings {
        DisplaySettings {
            geometry: DisplayGeometry {
                cols: self.cols,
                rows: self.rows,
            },
            interval: Duration::from_secs(self.interval),
            cycles: self.cycles,
            clear_screen,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Invalid entropy source: {0}")]
    InvalidEntropy(String),

    #[error("Invalid display settings: {0}")]
    InvalidDisplay(String),
}
