//! Conflux address converter
//!
//! Converts hex addresses to base32 and base32 addresses back to hex.
//! Network and output form come from the environment, see [`config`].

use std::process::ExitCode;

mod config;
mod convert;
mod error;

use config::ConverterConfig;
use error::CliError;

fn run() -> Result<bool, CliError> {
    let config = ConverterConfig::from_env()?;
    log::info!(
        "Loaded configuration: network_id={}, verbose={}, expected_network={:?}",
        config.network_id,
        config.verbose,
        config.expected_network
    );

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        return Err(CliError::Usage);
    }

    let mut all_ok = true;
    for input in &inputs {
        match convert::convert(input, &config) {
            Ok(conversion) => println!("{}", conversion),
            Err(e) => {
                log::warn!("{}: {}", input, e);
                eprintln!("{}: {}", input, e);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Conflux address converter...");

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}
