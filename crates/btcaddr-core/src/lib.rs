//! Bitcoin address classification and validation for the wallet.
//!
//! This crate provides pure Rust implementations of:
//! - Base58Check encoding and decoding with double-SHA256 checksums
//! - Bech32 (BIP-173) encoding and segwit v0 decoding
//! - Structural address classification (P2PKH, P2SH, P2WPKH, P2WSH, xpub)
//! - Network-aware validation for mainnet and testnet
//!
//! Everything here is stateless: no I/O, no key material.

pub mod address;
pub mod base58;
pub mod bech32;
pub mod classify;
pub mod config;
pub mod error;
pub mod hash;
pub mod network;

pub use address::{address_type, is_valid, validate, DecodedPayload, ValidatedAddress};
pub use classify::{classify, AddressType};
pub use config::{ConfigError, Validator, ValidatorConfig};
pub use error::{AddressError, ErrorKind};
pub use hash::double_sha256;
pub use network::Network;
