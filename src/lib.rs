//! # bitaddr
//!
//! Bitcoin-style address and WIF private key generator.
//!
//! ## Architecture
//!
//! - `crypto`: Key validation, hashing, base58-check, address and WIF encoding
//! - `entropy`: Injectable entropy sources
//! - `deriver`: The entropy to (address, WIF) pipeline
//! - `network`: Address/WIF prefix presets
//! - `output`: Serial and character-display presentation
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod deriver;
pub mod entropy;
pub mod network;
pub mod output;

pub use config::Config;
pub use crypto::{DeriveError, EncodedAddress, EncodedPrivateKey, PublicKeyPoint, RawPrivateKey};
pub use deriver::{derive_from_entropy, DerivedKey, KeyAddressDeriver};
pub use entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use network::{Network, Prefixes};
pub use output::{Output, OutputError, OutputMode, Presenter};
