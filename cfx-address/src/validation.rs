//! Address validation functions.

use crate::parsing::parse_cfx_address;
use crate::{Address, AddressType, NetworkType};

/// Result of address validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the address is valid.
    pub is_valid: bool,
    /// Detected network.
    pub network: Option<NetworkType>,
    /// Detected address type.
    pub address_type: Option<AddressType>,
    /// Validation messages (warnings or errors).
    pub messages: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result.
    pub fn valid(network: NetworkType, address_type: AddressType) -> Self {
        Self {
            is_valid: true,
            network: Some(network),
            address_type: Some(address_type),
            messages: vec![],
        }
    }

    /// Create an invalid result with an error message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            network: None,
            address_type: None,
            messages: vec![message.into()],
        }
    }

    /// Add a warning message.
    pub fn with_warning(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl Address {
    /// Whether the address type is one funds can be routed to.
    pub fn is_valid(&self) -> bool {
        self.address_type.is_routable()
    }
}

/// Validate an untrusted base32 address string.
///
/// Never fails: parse errors are reported in the returned messages.
///
/// # Example
/// ```rust
/// use cfx_address::validate_cfx_address;
///
/// let result = validate_cfx_address("cfx:acc7uawf5ubtnmezvhu9dhc6sghea0403y2dgpyfjp");
/// assert!(result.is_valid);
///
/// let result = validate_cfx_address("cfx:acc7uawf5ubtnmezvhu9dhc6sghea0403y2dgpyfjq");
/// assert!(!result.is_valid);
/// ```
pub fn validate_cfx_address(address_str: &str) -> ValidationResult {
    let address = match parse_cfx_address(address_str) {
        Ok(addr) => addr,
        Err(e) => return ValidationResult::invalid(e.to_string()),
    };

    let result = if address.is_valid() {
        ValidationResult::valid(address.network_type(), address.address_type())
    } else {
        ValidationResult {
            network: Some(address.network_type()),
            address_type: Some(address.address_type()),
            ..ValidationResult::invalid(format!(
                "Address type {} cannot receive funds",
                address.address_type()
            ))
        }
    };

    match address.network_type() {
        NetworkType::Custom(_) => result.with_warning(format!(
            "Address belongs to custom network {}",
            address.network_type()
        )),
        _ => result,
    }
}

/// Check if an address is on the expected network.
pub fn validate_network(address: &Address, network: NetworkType) -> bool {
    address.network_type() == network
}
