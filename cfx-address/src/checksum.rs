//! CIP-37 checksum: a 40-bit BCH code over the network prefix and body.

use std::fmt;

use crate::body::{quintets_to_text, Body};
use crate::NetworkType;

/// Number of base32 characters in a checksum.
pub const CHECKSUM_LEN: usize = 8;

const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Checksum of an address, as 8 quintets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; CHECKSUM_LEN]);

impl Checksum {
    /// Compute the checksum binding `body` to `network`.
    pub fn compute(network: NetworkType, body: &Body) -> Self {
        let prefix = network.to_string();
        let quintets = body.quintets();

        let mut data = Vec::with_capacity(prefix.len() + 1 + quintets.len() + CHECKSUM_LEN);
        data.extend(prefix.bytes().map(|b| b & 0x1f));
        data.push(0);
        data.extend_from_slice(&quintets);
        data.extend_from_slice(&[0u8; CHECKSUM_LEN]);

        let digest = polymod(&data);

        let mut out = [0u8; CHECKSUM_LEN];
        for (i, q) in out.iter_mut().enumerate() {
            *q = ((digest >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
        }
        Self(out)
    }

    /// Recompute and compare against a supplied checksum text.
    pub fn verify(expected: &str, network: NetworkType, body: &Body) -> bool {
        Self::compute(network, body).to_string() == expected
    }

    /// Get the raw quintets.
    pub fn quintets(&self) -> &[u8; CHECKSUM_LEN] {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quintets_to_text(&self.0))
    }
}

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ d as u64;

        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(hex_str: &str) -> Body {
        Body::from_address_bytes(&hex::decode(hex_str).unwrap()).unwrap()
    }

    #[test]
    fn test_golden_vectors() {
        let cases = [
            ("85d80245dc02f5a89589e1f19c5c718e405b56cd", NetworkType::Mainnet, "2dgpyfjp"),
            ("85d80245dc02f5a89589e1f19c5c718e405b56cd", NetworkType::Testnet, "wjz6wtpg"),
            ("19f4bcf113e0b896d9b34294fd3da86b4adf0302", NetworkType::Testnet, "p1u3sp4g"),
            ("19f4bcf113e0b896d9b34294fd3da86b4adf0302", NetworkType::Mainnet, "g6dkjg8p"),
            ("19f4bcf113e0b896d9b34294fd3da86b4adf0302", NetworkType::Custom(8888), "6gm0mcub"),
            ("19f4bcf113e0b896d9b34294fd3da86b4adf0302", NetworkType::UNSET, "et9hp7db"),
            ("0000000000000000000000000000000000000000", NetworkType::Mainnet, "0sfbnjm2"),
            ("0888000000000000000000000000000000000002", NetworkType::Mainnet, "rwuc9jnb"),
        ];

        for (hex_str, network, expected) in cases {
            let checksum = Checksum::compute(network, &body_of(hex_str));
            assert_eq!(checksum.to_string(), expected, "{} on {}", hex_str, network);
        }
    }

    #[test]
    fn test_verify() {
        let body = body_of("19f4bcf113e0b896d9b34294fd3da86b4adf0302");
        assert!(Checksum::verify("p1u3sp4g", NetworkType::Testnet, &body));
        assert!(!Checksum::verify("p1u3sp4h", NetworkType::Testnet, &body));
        assert!(!Checksum::verify("p1u3sp4g", NetworkType::Mainnet, &body));
    }

    #[test]
    fn test_network_sensitivity() {
        let body = body_of("19f4bcf113e0b896d9b34294fd3da86b4adf0302");
        let ids = [1u32, 2, 3, 71, 1029, 8888];
        let checksums: Vec<Checksum> = ids
            .iter()
            .map(|&id| Checksum::compute(NetworkType::from_network_id(id), &body))
            .collect();

        for i in 0..checksums.len() {
            for j in (i + 1)..checksums.len() {
                assert_ne!(checksums[i], checksums[j]);
            }
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let body = body_of("85d80245dc02f5a89589e1f19c5c718e405b56cd");
        let a = Checksum::compute(NetworkType::Mainnet, &body);
        let b = Checksum::compute(NetworkType::Mainnet, &body);
        assert_eq!(a, b);
    }
}
