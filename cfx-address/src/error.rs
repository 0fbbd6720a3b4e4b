//! Error types for address operations.

use thiserror::Error;

use crate::{AddressType, NetworkType};

/// Errors that can occur during address operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The base32 string mixes lowercase and uppercase letters.
    #[error("Mixed lowercase and uppercase is not allowed: {0}")]
    MixedCaseNotAllowed(String),

    /// The base32 string does not have 2 or 3 colon separated segments.
    #[error("Malformed address {input}: expected 2 or 3 segments, got {segments}")]
    MalformedAddress { input: String, segments: usize },

    /// The network prefix is not `cfx`, `cfxtest` or `net<id>`.
    #[error("Unrecognized network type: {0}")]
    UnrecognizedNetworkType(String),

    /// The final segment cannot hold a checksum.
    #[error("Body with checksum {input} is too short: {len} characters, need at least 8")]
    BodyTooShort { input: String, len: usize },

    /// The body contains a character outside the base32 alphabet.
    #[error("Invalid base32 character: {0:?}")]
    InvalidBodyAlphabet(char),

    /// The trailing padding bits of the body are not zero.
    #[error("Invalid padding in base32 body")]
    InvalidPadding,

    /// The version byte has reserved bits set.
    #[error("Invalid version byte: {0:#04x}")]
    InvalidVersionByte(u8),

    /// The payload length is not one of the supported address sizes.
    #[error("Unsupported payload length: {0} bytes")]
    UnsupportedPayloadLength(usize),

    /// The first payload byte maps to no known address type.
    #[error("Invalid address type for leading byte {0:#04x}")]
    InvalidAddressType(u8),

    /// The verbose type label disagrees with the decoded payload.
    #[error("Address type label mismatch: expected {expected}, got {actual}")]
    AddressTypeLabelMismatch {
        expected: AddressType,
        actual: String,
    },

    /// The supplied checksum does not match the computed one.
    #[error("Invalid checksum: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// The hex string could not be decoded.
    #[error("Invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    /// The payload does not fit into the fixed width target.
    #[error("Payload too long: at most {max} bytes allowed, got {actual}")]
    PayloadTooLongForTarget { max: usize, actual: usize },

    /// The network is unset and has no numeric id.
    #[error("Network type is unresolved")]
    UnresolvedNetworkType,

    /// The network does not match expected.
    #[error("Network mismatch: expected {expected}, got {actual}")]
    NetworkMismatch {
        expected: NetworkType,
        actual: NetworkType,
    },

    /// The network id provider failed.
    #[error("Network lookup failed: {0}")]
    NetworkLookupFailed(#[from] NetworkUnavailable),
}

/// Failure reported by a [`NetworkIdProvider`](crate::NetworkIdProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Network unavailable: {0}")]
pub struct NetworkUnavailable(pub String);
