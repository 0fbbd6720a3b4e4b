//! Core value types: networks and address types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressError;

const MAINNET_PREFIX: &str = "cfx";
const TESTNET_PREFIX: &str = "cfxtest";
const CUSTOM_PREFIX: &str = "net";

/// Network an address belongs to.
///
/// The text prefix and the numeric id are always mutually derivable.
/// `Custom(0)` is the unset network: it formats as `net0` but has no id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    /// Conflux mainnet (`cfx`, id 1029).
    Mainnet,
    /// Conflux testnet (`cfxtest`, id 1).
    Testnet,
    /// Any other network (`net<id>`).
    Custom(u32),
}

impl NetworkType {
    /// The network of an address created without network context.
    pub const UNSET: NetworkType = NetworkType::Custom(0);

    /// Parse a lowercase network prefix.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        match text {
            MAINNET_PREFIX => Ok(NetworkType::Mainnet),
            TESTNET_PREFIX => Ok(NetworkType::Testnet),
            _ => {
                let digits = text
                    .strip_prefix(CUSTOM_PREFIX)
                    .filter(|d| is_canonical_decimal(d))
                    .ok_or_else(|| AddressError::UnrecognizedNetworkType(text.to_string()))?;

                match digits.parse::<u32>() {
                    Ok(id) if id != 0 && id != crate::MAINNET_ID && id != crate::TESTNET_ID => {
                        Ok(NetworkType::Custom(id))
                    }
                    _ => Err(AddressError::UnrecognizedNetworkType(text.to_string())),
                }
            }
        }
    }

    /// Map a numeric network id, `0` meaning unset.
    pub fn from_network_id(id: u32) -> Self {
        match id {
            crate::MAINNET_ID => NetworkType::Mainnet,
            crate::TESTNET_ID => NetworkType::Testnet,
            other => NetworkType::Custom(other),
        }
    }

    /// Get the numeric network id.
    pub fn to_network_id(&self) -> Result<u32, AddressError> {
        match self {
            NetworkType::Mainnet => Ok(crate::MAINNET_ID),
            NetworkType::Testnet => Ok(crate::TESTNET_ID),
            NetworkType::Custom(0) => Err(AddressError::UnresolvedNetworkType),
            NetworkType::Custom(id) => Ok(*id),
        }
    }

    /// Whether this network has a nonzero id.
    pub fn is_resolved(&self) -> bool {
        self.to_network_id().is_ok()
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Mainnet => f.write_str(MAINNET_PREFIX),
            NetworkType::Testnet => f.write_str(TESTNET_PREFIX),
            NetworkType::Custom(id) => write!(f, "{}{}", CUSTOM_PREFIX, id),
        }
    }
}

impl FromStr for NetworkType {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Digits only, no sign and no leading zero.
fn is_canonical_decimal(digits: &str) -> bool {
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !(digits.len() > 1 && digits.starts_with('0'))
}

/// Coarse category of an address, derived from its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// The all-zero null address family (`0x00`).
    Null,
    /// Internal contracts (`0x01..=0x0f`).
    Builtin,
    /// Externally owned accounts (`0x10..=0x1f`).
    User,
    /// Deployed contracts (`0x80..=0x8f`).
    Contract,
    /// Anything else.
    Invalid,
}

impl AddressType {
    const NULL: &'static str = "null";
    const BUILTIN: &'static str = "builtin";
    const USER: &'static str = "user";
    const CONTRACT: &'static str = "contract";
    const INVALID: &'static str = "invalid";

    /// Prefix of the verbose label, e.g. `type.user`.
    pub const LABEL_PREFIX: &'static str = "type.";

    /// Classify a binary address by its leading byte.
    pub fn classify(payload: &[u8]) -> Self {
        match payload.first() {
            Some(0x00) => AddressType::Null,
            Some(0x01..=0x0f) => AddressType::Builtin,
            Some(0x10..=0x1f) => AddressType::User,
            Some(0x80..=0x8f) => AddressType::Contract,
            _ => AddressType::Invalid,
        }
    }

    /// Whether funds can be routed to this kind of address.
    pub fn is_routable(&self) -> bool {
        !matches!(self, AddressType::Invalid)
    }

    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            AddressType::Null => Self::NULL,
            AddressType::Builtin => Self::BUILTIN,
            AddressType::User => Self::USER,
            AddressType::Contract => Self::CONTRACT,
            AddressType::Invalid => Self::INVALID,
        }
    }

    /// Parse a label, case-insensitively, with or without the `type.` prefix.
    pub fn from_label(text: &str) -> Option<Self> {
        let lower = text.to_ascii_lowercase();
        let bare = lower.strip_prefix(Self::LABEL_PREFIX).unwrap_or(&lower);
        match bare {
            Self::NULL => Some(AddressType::Null),
            Self::BUILTIN => Some(AddressType::Builtin),
            Self::USER => Some(AddressType::User),
            Self::CONTRACT => Some(AddressType::Contract),
            Self::INVALID => Some(AddressType::Invalid),
            _ => None,
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
