//! Address parsing from base32 strings.

use std::str::FromStr;

use crate::body::Body;
use crate::checksum::{Checksum, CHECKSUM_LEN};
use crate::{Address, AddressError, AddressType, NetworkType};

impl Address {
    /// Parse a base32 address, compact (`cfx:...`) or verbose (`CFX:TYPE.USER:...`).
    ///
    /// # Arguments
    /// * `base32_str` - Uniformly lowercase or uppercase address string
    ///
    /// # Returns
    /// * `Ok(Address)` - Every field validated, checksum included
    /// * `Err(AddressError)` - The first check that failed
    pub fn from_base32(base32_str: &str) -> Result<Self, AddressError> {
        if base32_str.to_lowercase() != base32_str && base32_str.to_uppercase() != base32_str {
            return Err(AddressError::MixedCaseNotAllowed(base32_str.to_string()));
        }
        let lower = base32_str.to_lowercase();

        let parts: Vec<&str> = lower.split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(AddressError::MalformedAddress {
                input: base32_str.to_string(),
                segments: parts.len(),
            });
        }

        let network_type = NetworkType::parse(parts[0])?;

        let body_with_checksum = parts[parts.len() - 1];
        let split = body_with_checksum
            .char_indices()
            .rev()
            .nth(CHECKSUM_LEN - 1)
            .map(|(i, _)| i)
            .ok_or_else(|| AddressError::BodyTooShort {
                input: body_with_checksum.to_string(),
                len: body_with_checksum.chars().count(),
            })?;
        let (body_str, supplied_checksum) = body_with_checksum.split_at(split);

        let body = Body::from_text(body_str)?;
        let address_type = AddressType::classify(body.hex_address());

        if parts.len() == 3 && AddressType::from_label(parts[1]) != Some(address_type) {
            return Err(AddressError::AddressTypeLabelMismatch {
                expected: address_type,
                actual: parts[1].to_string(),
            });
        }

        if !Checksum::verify(supplied_checksum, network_type, &body) {
            return Err(AddressError::ChecksumMismatch {
                expected: Checksum::compute(network_type, &body).to_string(),
                actual: supplied_checksum.to_string(),
            });
        }

        Ok(Address::assemble(network_type, address_type, body))
    }

    /// Like [`from_base32`](Self::from_base32) but panics on invalid input.
    ///
    /// Only for inputs that are valid by construction, e.g. literals.
    pub fn must_from_base32(base32_str: &str) -> Self {
        Self::from_base32(base32_str)
            .unwrap_or_else(|e| panic!("invalid base32 address {}: {}", base32_str, e))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base32(s)
    }
}

/// Parse a Conflux address from a base32 string.
pub fn parse_cfx_address(address_str: &str) -> Result<Address, AddressError> {
    Address::from_base32(address_str)
}

/// Parse a Conflux address with network validation.
///
/// # Arguments
/// * `address_str` - The base32 address string
/// * `expected_network` - The network the address must belong to
///
/// # Returns
/// * `Ok(Address)` - Successfully parsed address on expected network
/// * `Err(AddressError)` - Parsing failed or network mismatch
pub fn parse_cfx_address_for_network(
    address_str: &str,
    expected_network: NetworkType,
) -> Result<Address, AddressError> {
    let address = parse_cfx_address(address_str)?;

    if address.network_type != expected_network {
        return Err(AddressError::NetworkMismatch {
            expected: expected_network,
            actual: address.network_type,
        });
    }

    Ok(address)
}
