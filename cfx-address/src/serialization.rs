//! Address serialization: base32 and hex output, serde support.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::address::COMMON_ADDRESS_LEN;
use crate::{Address, AddressError, AddressType};

impl Address {
    /// Serialize to a base32 string.
    ///
    /// # Format
    /// ```text
    /// compact: cfx:acc7uawf5ubtnmezvhu9dhc6sghea0403y2dgpyfjp
    /// verbose: CFX:TYPE.CONTRACT:ACC7UAWF5UBTNMEZVHU9DHC6SGHEA0403Y2DGPYFJP
    /// ```
    pub fn to_base32(&self, verbose: bool) -> String {
        if verbose {
            format!(
                "{}:{}{}:{}{}",
                self.network_type,
                AddressType::LABEL_PREFIX,
                self.address_type,
                self.body,
                self.checksum
            )
            .to_uppercase()
        } else {
            self.to_string()
        }
    }

    /// Compact lowercase base32 string.
    pub fn base32(&self) -> String {
        self.to_base32(false)
    }

    /// Verbose uppercase base32 string, including the address type.
    pub fn verbose_base32(&self) -> String {
        self.to_base32(true)
    }

    /// Get the hex address (lowercase, no `0x`) and the network id.
    pub fn to_hex(&self) -> (String, u32) {
        (hex::encode(&self.hex), self.network_id)
    }

    /// Get the `0x` prefixed hex address.
    pub fn hex_address(&self) -> String {
        format!("0x{}", hex::encode(&self.hex))
    }

    /// Convert to the fixed 20-byte common form and the network id.
    ///
    /// Shorter payloads are left-padded with zeros.
    pub fn to_common(&self) -> Result<([u8; COMMON_ADDRESS_LEN], u32), AddressError> {
        if self.hex.len() > COMMON_ADDRESS_LEN {
            return Err(AddressError::PayloadTooLongForTarget {
                max: COMMON_ADDRESS_LEN,
                actual: self.hex.len(),
            });
        }

        let mut common = [0u8; COMMON_ADDRESS_LEN];
        common[COMMON_ADDRESS_LEN - self.hex.len()..].copy_from_slice(&self.hex);
        Ok((common, self.network_id))
    }

    /// Like [`to_common`](Self::to_common) but panics if the payload is too long.
    pub fn must_to_common(&self) -> [u8; COMMON_ADDRESS_LEN] {
        match self.to_common() {
            Ok((common, _)) => common,
            Err(e) => panic!("failed to get common address of {}: {}", self, e),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.network_type, self.body, self.checksum)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base32(true))
    }
}

impl<'de> Deserialize<'de> for Address {
    /// `null` yields [`Address::default`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(AddressVisitor)
    }
}

struct AddressVisitor;

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base32 Conflux address or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Address, E> {
        Ok(Address::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Address, E> {
        Ok(Address::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Address, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Address, E> {
        Address::from_base32(value).map_err(|e| {
            E::custom(format!("failed to create address from base32 string {}: {}", value, e))
        })
    }
}
