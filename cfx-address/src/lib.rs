//! Conflux Base32 Address Codec
//!
//! This crate provides parsing, validation, and serialization of Conflux
//! account addresses in the CIP-37 base32 format.
//!
//! # Overview
//!
//! An address is made of:
//! - A network prefix: `cfx` (mainnet), `cfxtest` (testnet) or `net<id>`
//! - An optional address type label (`type.user`, `type.contract`, ...)
//! - A body: a version byte plus the address bytes, in 5-bit groups
//! - An 8 character checksum bound to both the network and the body
//!
//! # Address Format
//!
//! ```text
//! cfx:acc7uawf5ubtnmezvhu9dhc6sghea0403y2dgpyfjp
//! CFX:TYPE.CONTRACT:ACC7UAWF5UBTNMEZVHU9DHC6SGHEA0403Y2DGPYFJP
//! ```
//!
//! # Example
//!
//! ```rust
//! use cfx_address::{Address, AddressType, NetworkType};
//!
//! let address = Address::from_hex("0x19f4bcf113e0b896d9b34294fd3da86b4adf0302", 1).unwrap();
//! assert_eq!(address.address_type(), AddressType::User);
//! assert_eq!(address.to_string(), "cfxtest:aap9kthvctunvf030rbkk9k7zbzyz12dajp1u3sp4g");
//!
//! let parsed: Address = "cfxtest:aap9kthvctunvf030rbkk9k7zbzyz12dajp1u3sp4g".parse().unwrap();
//! assert_eq!(parsed, address);
//! assert_eq!(parsed.network_type(), NetworkType::Testnet);
//! ```

mod address;
mod body;
mod checksum;
mod error;
mod parsing;
mod serialization;
mod types;
mod validation;

pub use address::{Address, NetworkIdProvider, COMMON_ADDRESS_LEN};
pub use body::{version_byte_for, Body, ALPHABET};
pub use checksum::{Checksum, CHECKSUM_LEN};
pub use error::{AddressError, NetworkUnavailable};
pub use parsing::{parse_cfx_address, parse_cfx_address_for_network};
pub use types::{AddressType, NetworkType};
pub use validation::{validate_cfx_address, validate_network, ValidationResult};

/// Network id of Conflux mainnet.
pub const MAINNET_ID: u32 = 1029;

/// Network id of Conflux testnet.
pub const TESTNET_ID: u32 = 1;
