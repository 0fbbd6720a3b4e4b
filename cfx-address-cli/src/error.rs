//! Error types for the converter.

use cfx_address::AddressError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Usage: cfxaddr <address>...")]
    Usage,
}
