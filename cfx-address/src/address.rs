//! The address aggregate and its binary constructors.

use crate::body::Body;
use crate::checksum::Checksum;
use crate::error::NetworkUnavailable;
use crate::{AddressError, AddressType, NetworkType};

/// Width of the fixed-size common binary address.
pub const COMMON_ADDRESS_LEN: usize = 20;

/// A Conflux address bound to a (possibly unset) network.
///
/// Every field is established at construction. `hex` and `network_id` are
/// caches of `body` and `network_type` and are recomputed together with
/// `checksum` whenever the network changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub(crate) network_type: NetworkType,
    pub(crate) address_type: AddressType,
    pub(crate) body: Body,
    pub(crate) checksum: Checksum,

    pub(crate) hex: Vec<u8>,
    pub(crate) network_id: u32,
}

/// Source of the network id for addresses created without one,
/// typically a client holding a node connection.
pub trait NetworkIdProvider {
    /// Get the id of the connected network.
    fn network_id(&self) -> Result<u32, NetworkUnavailable>;
}

impl<F> NetworkIdProvider for F
where
    F: Fn() -> Result<u32, NetworkUnavailable>,
{
    fn network_id(&self) -> Result<u32, NetworkUnavailable> {
        self()
    }
}

impl Address {
    /// Assemble an address from an already validated body.
    pub(crate) fn assemble(network_type: NetworkType, address_type: AddressType, body: Body) -> Self {
        let checksum = Checksum::compute(network_type, &body);
        let hex = body.hex_address().to_vec();
        let network_id = network_type.to_network_id().unwrap_or(0);

        Self {
            network_type,
            address_type,
            body,
            checksum,
            hex,
            network_id,
        }
    }

    /// Create an address from raw address bytes.
    ///
    /// A `network_id` of 0 leaves the network unset; see
    /// [`complete_by_network_id`](Self::complete_by_network_id).
    pub fn from_bytes(hex_address: &[u8], network_id: u32) -> Result<Self, AddressError> {
        let address_type = AddressType::classify(hex_address);
        if !address_type.is_routable() {
            return Err(match hex_address.first() {
                Some(&first) => AddressError::InvalidAddressType(first),
                None => AddressError::UnsupportedPayloadLength(0),
            });
        }

        let body = Body::from_address_bytes(hex_address)?;
        Ok(Self::assemble(
            NetworkType::from_network_id(network_id),
            address_type,
            body,
        ))
    }

    /// Create an address from a hex string, with or without `0x`.
    pub fn from_hex(hex_str: &str, network_id: u32) -> Result<Self, AddressError> {
        let digits = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);

        let bytes = hex::decode(digits)
            .map_err(|e| AddressError::InvalidHexEncoding(format!("{}: {}", hex_str, e)))?;

        Self::from_bytes(&bytes, network_id)
    }

    /// Create an address from the fixed 20-byte common form.
    pub fn from_common(common: &[u8; COMMON_ADDRESS_LEN], network_id: u32) -> Result<Self, AddressError> {
        Self::from_bytes(common, network_id)
    }

    /// Like [`from_bytes`](Self::from_bytes) but panics on invalid input.
    ///
    /// Only for inputs that are valid by construction, e.g. literals.
    pub fn must_from_bytes(hex_address: &[u8], network_id: u32) -> Self {
        Self::from_bytes(hex_address, network_id).unwrap_or_else(|e| {
            panic!(
                "invalid address bytes {}, network id {}: {}",
                hex::encode(hex_address),
                network_id,
                e
            )
        })
    }

    /// Like [`from_hex`](Self::from_hex) but panics on invalid input.
    ///
    /// Only for inputs that are valid by construction, e.g. literals.
    pub fn must_from_hex(hex_str: &str, network_id: u32) -> Self {
        Self::from_hex(hex_str, network_id).unwrap_or_else(|e| {
            panic!("invalid hex address {}, network id {}: {}", hex_str, network_id, e)
        })
    }

    /// Like [`from_common`](Self::from_common) but panics on invalid input.
    ///
    /// Only for inputs that are valid by construction, e.g. literals.
    pub fn must_from_common(common: &[u8; COMMON_ADDRESS_LEN], network_id: u32) -> Self {
        Self::from_common(common, network_id).unwrap_or_else(|e| {
            panic!(
                "invalid common address {}, network id {}: {}",
                hex::encode(common),
                network_id,
                e
            )
        })
    }

    /// Get the network type.
    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// Get the address type.
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// Get the body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Get the checksum.
    pub fn checksum(&self) -> Checksum {
        self.checksum
    }

    /// Get the cached network id, 0 while the network is unset.
    pub fn network_id(&self) -> u32 {
        self.network_id
    }

    /// Get the cached address bytes.
    pub fn hex_bytes(&self) -> &[u8] {
        &self.hex
    }

    /// Bind an address with an unset network to `network_id`.
    ///
    /// No-op when the network already resolves to a nonzero id. Needs
    /// exclusive access; callers sharing an address across threads must
    /// serialize completion themselves, or use
    /// [`with_network_id`](Self::with_network_id) on a copy.
    pub fn complete_by_network_id(&mut self, network_id: u32) {
        if self.network_type.is_resolved() {
            return;
        }

        log::debug!("completing address {} with network id {}", self.body, network_id);

        self.network_type = NetworkType::from_network_id(network_id);
        self.checksum = Checksum::compute(self.network_type, &self.body);
        self.hex = self.body.hex_address().to_vec();
        self.network_id = network_id;
    }

    /// Consuming form of [`complete_by_network_id`](Self::complete_by_network_id).
    pub fn with_network_id(mut self, network_id: u32) -> Self {
        self.complete_by_network_id(network_id);
        self
    }

    /// Bind an address with an unset network to the id reported by `provider`.
    ///
    /// The provider is not consulted when the network is already resolved.
    /// On failure the address is left unchanged.
    pub fn complete_by_network_lookup<P>(&mut self, provider: &P) -> Result<(), AddressError>
    where
        P: NetworkIdProvider + ?Sized,
    {
        if self.network_type.is_resolved() {
            return Ok(());
        }

        let network_id = provider.network_id().map_err(|e| {
            log::debug!("network lookup for address {} failed: {}", self.body, e);
            AddressError::NetworkLookupFailed(e)
        })?;

        self.complete_by_network_id(network_id);
        Ok(())
    }
}

impl Default for Address {
    /// The null address on the unset network.
    fn default() -> Self {
        Self::assemble(NetworkType::UNSET, AddressType::Null, Body::null())
    }
}
