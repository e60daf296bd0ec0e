//! WebAssembly bindings for Bitcoin address validation.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Checking addresses entered for contacts and payment recipients
//! - Classifying addresses by type and network
//! - Detailed validation reports for form feedback

use wasm_bindgen::prelude::*;

pub mod report;
pub mod validator;

// Re-export main types for JS access
pub use report::{AddressInfo, ValidationReport};
pub use validator::{is_valid_address, AddressValidator};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
