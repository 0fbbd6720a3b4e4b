//! Conversion between hex and base32 address forms.

use std::fmt;

use cfx_address::{parse_cfx_address, parse_cfx_address_for_network, Address, AddressType};

use crate::config::ConverterConfig;
use crate::error::CliError;

/// Result of converting one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Hex input rendered as base32.
    Base32(String),
    /// Base32 input decoded to its binary form.
    Hex {
        hex: String,
        network_id: u32,
        address_type: AddressType,
    },
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Base32(text) => f.write_str(text),
            Conversion::Hex {
                hex,
                network_id,
                address_type,
            } => write!(f, "{} {} {}", hex, network_id, address_type),
        }
    }
}

/// Whether `input` looks like a hex address rather than a base32 one.
fn is_hex_input(input: &str) -> bool {
    input.starts_with("0x") || input.starts_with("0X") || !input.contains(':')
}

/// Convert a single address, hex to base32 or base32 to hex.
pub fn convert(input: &str, config: &ConverterConfig) -> Result<Conversion, CliError> {
    let input = input.trim();
    if is_hex_input(input) {
        let mut address = Address::from_hex(input, 0)?;
        if let Err(e) = address.complete_by_network_lookup(config) {
            log::warn!("leaving {} unbound: {}", input, e);
        }
        return Ok(Conversion::Base32(address.to_base32(config.verbose)));
    }

    let address = match config.expected_network {
        Some(network) => parse_cfx_address_for_network(input, network)?,
        None => parse_cfx_address(input)?,
    };

    Ok(Conversion::Hex {
        hex: address.hex_address(),
        network_id: address.network_id(),
        address_type: address.address_type(),
    })
}
