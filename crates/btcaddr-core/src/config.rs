//! Validator configuration.
//!
//! The network mode comes from the application's settings document, e.g.
//! `{"network": "testnet"}`. Missing fields fall back to mainnet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{self, ValidatedAddress};
use crate::classify::AddressType;
use crate::error::AddressError;
use crate::network::Network;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Network name not recognized
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    /// Settings document is not valid JSON for this config
    #[error("Invalid validator config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings that drive address validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Network addresses must belong to.
    pub network: Network,
}

impl ValidatorConfig {
    /// Create a config for the given network.
    pub fn new(network: Network) -> Self {
        ValidatorConfig { network }
    }

    /// Parse a config from a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a validator for the configured network.
    pub fn validator(&self) -> Validator {
        Validator::new(self.network)
    }
}

/// Address validator bound to one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    network: Network,
}

impl Validator {
    /// Create a validator that accepts addresses of the given network.
    pub fn new(network: Network) -> Self {
        Validator { network }
    }

    /// The network this validator accepts.
    pub fn network(&self) -> Network {
        self.network
    }

    /// See [`address::is_valid`].
    pub fn is_valid(&self, address: &str) -> bool {
        address::is_valid(address, self.network)
    }

    /// See [`address::validate`].
    pub fn validate(&self, address: &str) -> Result<ValidatedAddress, AddressError> {
        address::validate(address, self.network)
    }

    /// See [`address::address_type`].
    pub fn address_type(&self, address: &str) -> AddressType {
        address::address_type(address)
    }
}

impl From<ValidatorConfig> for Validator {
    fn from(config: ValidatorConfig) -> Self {
        config.validator()
    }
}
