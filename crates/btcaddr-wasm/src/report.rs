//! Validation results shaped for JavaScript.

use btcaddr_core::{AddressError, AddressType, ErrorKind, Network, ValidatedAddress};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Outcome of validating one address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// The address as entered.
    pub address: String,
    /// Whether the address is valid on the configured network.
    pub valid: bool,
    /// Address type name (e.g. "P2WPKH"), from classification alone.
    pub address_type: String,
    /// Network implied by the address prefix, if recognized.
    pub network: Option<Network>,
    /// Hex of the decoded hash or witness program.
    pub program: Option<String>,
    /// Human-readable rejection reason.
    pub error: Option<String>,
    /// Rejection category.
    pub error_kind: Option<ErrorKind>,
}

impl ValidationReport {
    /// Build a report from a validation result.
    pub fn new(address: &str, result: Result<ValidatedAddress, AddressError>) -> Self {
        match result {
            Ok(validated) => ValidationReport {
                address: address.to_string(),
                valid: true,
                address_type: validated.address_type.name().to_string(),
                network: validated.address_type.network(),
                program: validated.payload.program().map(hex::encode),
                error: None,
                error_kind: None,
            },
            Err(err) => {
                let classified = btcaddr_core::address_type(address);
                ValidationReport {
                    address: address.to_string(),
                    valid: false,
                    address_type: classified.name().to_string(),
                    network: classified.network(),
                    program: None,
                    error: Some(err.to_string()),
                    error_kind: Some(err.kind()),
                }
            }
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Classification of an address, without validity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressInfo {
    /// Address type name.
    pub address_type: String,
    /// Network implied by the prefix.
    pub network: Option<Network>,
    /// Whether any classification rule matched.
    pub known: bool,
}

impl From<AddressType> for AddressInfo {
    fn from(address_type: AddressType) -> Self {
        AddressInfo {
            address_type: address_type.name().to_string(),
            network: address_type.network(),
            known: address_type.is_known(),
        }
    }
}

impl AddressInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
