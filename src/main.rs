//! Address generator CLI
//!
//! Usage:
//!   bitaddr                          # One mainnet pair, printed to the console
//!   bitaddr -n testnet -c 5          # Five testnet pairs
//!   bitaddr -o both -i 30 --cycles 2 # Console, then rotate on the display

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use crossterm::tty::IsTty;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use bitaddr::{Config, EntropySource, FixedEntropy, KeyAddressDeriver, Output, Presenter, Prefixes};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bitaddr=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let prefixes = config.prefixes();
    info!(
        network = %config.network,
        address_prefix = %format!("{:#04x}", prefixes.address),
        wif_prefix = %format!("{:#04x}", prefixes.wif),
        output = %config.output,
        count = config.count,
        "Starting bitaddr v{}",
        env!("CARGO_PKG_VERSION")
    );
    if config.has_custom_prefixes() {
        warn!("Custom prefixes in use; output may not be valid on any public network");
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    ctrlc_handler(stop_flag.clone());

    let clear_screen = std::io::stdout().is_tty();
    let mut output = Output::stdout(
        config.output,
        config.display_settings(clear_screen),
        stop_flag.clone(),
    );

    let generated = match config.brainwallet {
        Some(ref passphrase) => {
            warn!("Brainwallet entropy is deterministic; never fund these keys");
            let deriver = KeyAddressDeriver::with_source(FixedEntropy::from_passphrase(passphrase));
            run(deriver, &config, prefixes, &mut output, &stop_flag)
        }
        None => run(KeyAddressDeriver::new(), &config, prefixes, &mut output, &stop_flag),
    };

    info!(generated, "Done");
}

/// Derives and presents `config.count` pairs, exiting the process on failure.
fn run<E: EntropySource>(
    mut deriver: KeyAddressDeriver<E>,
    config: &Config,
    prefixes: Prefixes,
    output: &mut impl Presenter,
    stop_flag: &AtomicBool,
) -> usize {
    let mut generated = 0;

    while generated < config.count {
        if stop_flag.load(Ordering::Relaxed) {
            info!("Stopped by user");
            break;
        }

        // Derivation completes before any output, so a failure never shows partial key material
        let key = match deriver.derive(prefixes.address, prefixes.wif) {
            Ok(key) => key,
            Err(e) => {
                eprintln!("Key derivation failed: {}", e);
                process::exit(1);
            }
        };
        generated += 1;
        debug!(index = generated, "Derived key pair");

        if let Err(e) = output.present(&key) {
            eprintln!("{}", e);
            eprintln!("Unable to output address and privkey");
            process::exit(1);
        }
    }

    generated
}

fn ctrlc_handler(stop_flag: Arc<AtomicBool>) {
    ctrlc::set_handler(move || {
        stop_flag.store(true, Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");
}
