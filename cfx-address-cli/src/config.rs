//! Converter configuration.

use std::env;

use cfx_address::{NetworkIdProvider, NetworkType, NetworkUnavailable, MAINNET_ID};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Converter configuration loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Network id hex inputs are bound to. 0 leaves them unbound.
    pub network_id: u32,
    /// Print the verbose base32 form.
    pub verbose: bool,
    /// Network base32 inputs must belong to.
    pub expected_network: Option<NetworkType>,
}

impl ConverterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through a variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            network_id: lookup("CFX_NETWORK_ID")
                .unwrap_or_else(|| MAINNET_ID.to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("CFX_NETWORK_ID".to_string()))?,
            verbose: match lookup("CFX_VERBOSE").as_deref() {
                None | Some("") | Some("false") | Some("0") => false,
                Some("true") | Some("1") => true,
                Some(_) => return Err(ConfigError::Invalid("CFX_VERBOSE".to_string())),
            },
            expected_network: lookup("CFX_EXPECTED_NETWORK")
                .filter(|prefix| !prefix.is_empty())
                .map(|prefix| NetworkType::parse(&prefix.to_lowercase()))
                .transpose()
                .map_err(|_| ConfigError::Invalid("CFX_EXPECTED_NETWORK".to_string()))?,
        })
    }
}

impl NetworkIdProvider for ConverterConfig {
    fn network_id(&self) -> Result<u32, NetworkUnavailable> {
        if self.network_id == 0 {
            return Err(NetworkUnavailable("CFX_NETWORK_ID is 0".to_string()));
        }
        Ok(self.network_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ConverterConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConverterConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.network_id, 1029);
        assert!(!config.verbose);
        assert_eq!(config.expected_network, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CFX_NETWORK_ID", "1"),
            ("CFX_VERBOSE", "true"),
            ("CFX_EXPECTED_NETWORK", "CFXTEST"),
        ])
        .unwrap();
        assert_eq!(config.network_id, 1);
        assert!(config.verbose);
        assert_eq!(config.expected_network, Some(NetworkType::Testnet));

        let config = config_from(&[("CFX_VERBOSE", "1"), ("CFX_EXPECTED_NETWORK", "net8888")]).unwrap();
        assert!(config.verbose);
        assert_eq!(config.expected_network, Some(NetworkType::Custom(8888)));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("CFX_NETWORK_ID", "mainnet")]),
            Err(ConfigError::Invalid("CFX_NETWORK_ID".to_string()))
        );
        assert_eq!(
            config_from(&[("CFX_VERBOSE", "yes")]),
            Err(ConfigError::Invalid("CFX_VERBOSE".to_string()))
        );
        assert_eq!(
            config_from(&[("CFX_EXPECTED_NETWORK", "net1029")]),
            Err(ConfigError::Invalid("CFX_EXPECTED_NETWORK".to_string()))
        );
    }

    #[test]
    fn test_network_id_provider() {
        let config = config_from(&[("CFX_NETWORK_ID", "8888")]).unwrap();
        assert_eq!(NetworkIdProvider::network_id(&config), Ok(8888));

        let unbound = config_from(&[("CFX_NETWORK_ID", "0")]).unwrap();
        assert!(NetworkIdProvider::network_id(&unbound).is_err());
    }
}
