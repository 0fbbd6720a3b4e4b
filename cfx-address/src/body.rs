//! Address body: version byte plus address bytes, and its base32 text form.

use std::fmt;

use crate::AddressError;

/// Base32 alphabet used by Conflux addresses. Order is significant.
pub const ALPHABET: &[u8; 32] = b"abcdefghjkmnprstuvwxyz0123456789";

/// Reserved bits of the version byte; must be zero.
const RESERVED_BITS_MASK: u8 = 0xf8;

/// Bits of the version byte encoding the address length.
const SIZE_MASK: u8 = 0x07;

/// Address lengths in bytes, indexed by the version byte's size code.
const ADDRESS_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// The payload of an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body {
    version_byte: u8,
    hex_address: Vec<u8>,
}

impl Body {
    /// Build a body from its version byte and address bytes.
    pub fn from_hex_address(version_byte: u8, hex_address: &[u8]) -> Result<Self, AddressError> {
        if version_byte & RESERVED_BITS_MASK != 0 {
            return Err(AddressError::InvalidVersionByte(version_byte));
        }
        if ADDRESS_SIZES[(version_byte & SIZE_MASK) as usize] != hex_address.len() {
            return Err(AddressError::UnsupportedPayloadLength(hex_address.len()));
        }

        Ok(Self {
            version_byte,
            hex_address: hex_address.to_vec(),
        })
    }

    /// Build a body from address bytes, deriving the version byte from the length.
    pub fn from_address_bytes(hex_address: &[u8]) -> Result<Self, AddressError> {
        Self::from_hex_address(version_byte_for(hex_address.len())?, hex_address)
    }

    /// Decode the base32 text form (without checksum).
    pub fn from_text(text: &str) -> Result<Self, AddressError> {
        let quintets = text
            .chars()
            .map(quintet_of)
            .collect::<Result<Vec<u8>, AddressError>>()?;

        let payload = quintets_to_bytes(&quintets)?;
        let (version_byte, hex_address) = payload
            .split_first()
            .ok_or(AddressError::UnsupportedPayloadLength(0))?;

        Self::from_hex_address(*version_byte, hex_address)
    }

    /// Get the version byte and the address bytes.
    pub fn to_hex_address(&self) -> (u8, Vec<u8>) {
        (self.version_byte, self.hex_address.clone())
    }

    /// Get the version byte.
    pub fn version_byte(&self) -> u8 {
        self.version_byte
    }

    /// Get the address bytes.
    pub fn hex_address(&self) -> &[u8] {
        &self.hex_address
    }

    /// The payload as 5-bit groups, the last group zero-padded.
    pub fn quintets(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + self.hex_address.len());
        payload.push(self.version_byte);
        payload.extend_from_slice(&self.hex_address);
        bytes_to_quintets(&payload)
    }

    /// The all-zero 20-byte body.
    pub(crate) fn null() -> Self {
        Self {
            version_byte: 0,
            hex_address: vec![0u8; ADDRESS_SIZES[0]],
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quintets_to_text(&self.quintets()))
    }
}

/// Compute the version byte for an address of `len` bytes.
pub fn version_byte_for(len: usize) -> Result<u8, AddressError> {
    ADDRESS_SIZES
        .iter()
        .position(|&size| size == len)
        .map(|code| code as u8)
        .ok_or(AddressError::UnsupportedPayloadLength(len))
}

/// Render quintets with the address alphabet.
pub(crate) fn quintets_to_text(quintets: &[u8]) -> String {
    quintets
        .iter()
        .map(|&q| ALPHABET[(q & 0x1f) as usize] as char)
        .collect()
}

fn quintet_of(c: char) -> Result<u8, AddressError> {
    ALPHABET
        .iter()
        .position(|&a| a as char == c)
        .map(|i| i as u8)
        .ok_or(AddressError::InvalidBodyAlphabet(c))
}

fn bytes_to_quintets(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity((data.len() * 8 + 4) / 5);

    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            result.push(((acc >> bits) & 0x1f) as u8);
        }
    }

    if bits > 0 {
        result.push(((acc << (5 - bits)) & 0x1f) as u8);
    }

    result
}

fn quintets_to_bytes(quintets: &[u8]) -> Result<Vec<u8>, AddressError> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity(quintets.len() * 5 / 8);

    for &q in quintets {
        acc = ((acc << 5) | q as u32) & 0xfff;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            result.push(((acc >> bits) & 0xff) as u8);
        }
    }

    // A whole spare quintet, or set padding bits, would make the encoding ambiguous.
    if bits >= 5 || (acc & ((1 << bits) - 1)) != 0 {
        return Err(AddressError::InvalidPadding);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Vec<u8> {
        hex::decode("19f4bcf113e0b896d9b34294fd3da86b4adf0302").unwrap()
    }

    #[test]
    fn test_text_form_of_known_address() {
        let body = Body::from_address_bytes(&sample_address()).unwrap();
        assert_eq!(body.to_string(), "aap9kthvctunvf030rbkk9k7zbzyz12daj");
        assert_eq!(body.version_byte(), 0);
        assert_eq!(body.quintets().len(), 34);
    }

    #[test]
    fn test_decode_known_text() {
        let body = Body::from_text("aap9kthvctunvf030rbkk9k7zbzyz12daj").unwrap();
        assert_eq!(body.to_hex_address(), (0, sample_address()));
    }

    #[test]
    fn test_all_sizes() {
        for (code, &size) in ADDRESS_SIZES.iter().enumerate() {
            let bytes: Vec<u8> = (0..size as u8).collect();
            let body = Body::from_address_bytes(&bytes).unwrap();
            assert_eq!(body.version_byte(), code as u8);

            let decoded = Body::from_text(&body.to_string()).unwrap();
            assert_eq!(decoded, body);
        }
    }

    #[test]
    fn test_unsupported_length() {
        assert_eq!(
            Body::from_address_bytes(&[0x10; 19]),
            Err(AddressError::UnsupportedPayloadLength(19))
        );
        assert_eq!(
            Body::from_address_bytes(&[]),
            Err(AddressError::UnsupportedPayloadLength(0))
        );
        // Size code says 24 bytes, payload has 20.
        assert_eq!(
            Body::from_hex_address(0x01, &[0x10; 20]),
            Err(AddressError::UnsupportedPayloadLength(20))
        );
    }

    #[test]
    fn test_reserved_version_bits() {
        assert_eq!(
            Body::from_hex_address(0x08, &[0x10; 20]),
            Err(AddressError::InvalidVersionByte(0x08))
        );
    }

    #[test]
    fn test_invalid_alphabet() {
        for bad in ['i', 'l', 'o', 'q', 'A', '-'] {
            let text = format!("aap9kthvctunvf030rbkk9k7zbzyz12da{}", bad);
            assert_eq!(Body::from_text(&text), Err(AddressError::InvalidBodyAlphabet(bad)));
        }
    }

    #[test]
    fn test_nonzero_padding_rejected() {
        // Last quintet carries two padding bits; 'j' = 0b01000 leaves them zero, 'k' = 0b01001 does not.
        assert!(Body::from_text("aap9kthvctunvf030rbkk9k7zbzyz12daj").is_ok());
        assert_eq!(
            Body::from_text("aap9kthvctunvf030rbkk9k7zbzyz12dak"),
            Err(AddressError::InvalidPadding)
        );
    }

    #[test]
    fn test_excess_padding_rejected() {
        assert_eq!(
            Body::from_text("aap9kthvctunvf030rbkk9k7zbzyz12daja"),
            Err(AddressError::InvalidPadding)
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(Body::from_text(""), Err(AddressError::UnsupportedPayloadLength(0)));
    }

    #[test]
    fn test_null_body() {
        let null = Body::null();
        assert_eq!(null, Body::from_address_bytes(&[0u8; 20]).unwrap());
        assert_eq!(null.to_string(), "a".repeat(34));
    }

    #[test]
    fn test_bit_packing_example() {
        // 0xff 0x01 -> 11111 11100 00000 1(0000)
        assert_eq!(bytes_to_quintets(&[0xff, 0x01]), vec![31, 28, 0, 16]);
        assert_eq!(quintets_to_bytes(&[31, 28, 0, 16]).unwrap(), vec![0xff, 0x01]);
    }
}
