//! Address validator exposed to JavaScript.

use btcaddr_core::{Network, Validator};
use wasm_bindgen::prelude::*;

use crate::report::{AddressInfo, ValidationReport};

/// Validates addresses for one network.
#[wasm_bindgen]
pub struct AddressValidator {
    validator: Validator,
}

#[wasm_bindgen]
impl AddressValidator {
    /// Create a validator for the specified network.
    ///
    /// # Arguments
    /// * `network` - "mainnet" or "testnet" (aliases: "main", "prod", "test")
    #[wasm_bindgen(constructor)]
    pub fn new(network: &str) -> Result<AddressValidator, JsValue> {
        let net = parse_network(network)?;
        Ok(AddressValidator {
            validator: Validator::new(net),
        })
    }

    /// Check whether an address is valid on this network.
    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self, address: &str) -> bool {
        self.validator.is_valid(address)
    }

    /// Classify an address without verifying its checksum.
    #[wasm_bindgen(js_name = addressType)]
    pub fn address_type(&self, address: &str) -> Result<JsValue, JsValue> {
        AddressInfo::from(self.validator.address_type(address)).to_js()
    }

    /// Validate an address and describe the outcome.
    pub fn validate(&self, address: &str) -> Result<JsValue, JsValue> {
        ValidationReport::new(address, self.validator.validate(address)).to_js()
    }

    /// Get the network name.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> String {
        self.validator.network().name().to_string()
    }
}

/// Check an address against a network in one call.
#[wasm_bindgen(js_name = isValidAddress)]
pub fn is_valid_address(address: &str, network: &str) -> Result<bool, JsValue> {
    let net = parse_network(network)?;
    Ok(btcaddr_core::is_valid(address, net))
}

fn parse_network(network: &str) -> Result<Network, JsValue> {
    network
        .parse::<Network>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
