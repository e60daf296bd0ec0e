//! Bitcoin address validation.
//!
//! Supports:
//! - P2PKH (Pay to Public Key Hash) - Legacy addresses starting with 1 (mainnet) or m/n (testnet)
//! - P2SH (Pay to Script Hash) - Addresses starting with 3 (mainnet) or 2 (testnet)
//! - P2WPKH (Pay to Witness Public Key Hash) - Native SegWit v0, bc1q.../tb1q...
//! - P2WSH (Pay to Witness Script Hash) - Native SegWit v0, bc1q... (32-byte program)
//! - BIP32 extended public keys (xpub.../tpub...), accepted without decoding
//!
//! Taproot and bare P2PK are not supported.

use tracing::{debug, trace};

use crate::base58;
use crate::bech32::{self, P2WPKH_PROGRAM_LEN, P2WSH_PROGRAM_LEN};
use crate::classify::{classify, AddressType};
use crate::error::AddressError;
use crate::network::Network;

/// Length of a Base58Check payload: version byte + 20-byte hash.
const BASE58_PAYLOAD_LEN: usize = 21;

/// Longest Base58Check encoding of a 21-byte payload (testnet P2SH).
const MAX_BASE58_ADDRESS_LEN: usize = 35;

/// Bytes recovered from an address after its checksum was verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    /// Base58Check version byte and HASH160
    Base58 { version: u8, hash: [u8; 20] },
    /// Segwit witness version and program
    Witness { version: u8, program: Vec<u8> },
    /// Extended public keys are not decoded
    Unchecked,
}

impl DecodedPayload {
    /// The hash or witness program, if one was decoded.
    pub fn program(&self) -> Option<&[u8]> {
        match self {
            DecodedPayload::Base58 { hash, .. } => Some(hash),
            DecodedPayload::Witness { program, .. } => Some(program),
            DecodedPayload::Unchecked => None,
        }
    }
}

/// A validated Bitcoin address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddress {
    /// The type of address.
    pub address_type: AddressType,
    /// The decoded payload.
    pub payload: DecodedPayload,
}

impl ValidatedAddress {
    /// The network this address belongs to.
    pub fn network(&self) -> Network {
        // Only known types are ever validated
        self.address_type.network().unwrap_or_default()
    }
}

/// Validate a Bitcoin address against the network in use.
pub fn validate(address: &str, mode: Network) -> Result<ValidatedAddress, AddressError> {
    let address_type = classify(address);
    let network = address_type.network().ok_or(AddressError::UnknownFormat)?;

    if network != mode {
        return Err(AddressError::NetworkMismatch { expected: mode, got: network });
    }

    let validated = match address_type {
        AddressType::P2PKH(net) => ValidatedAddress {
            address_type,
            payload: decode_base58_payload(address, net.p2pkh_version())?,
        },
        AddressType::P2SH(net) => ValidatedAddress {
            address_type,
            payload: decode_base58_payload(address, net.p2sh_version())?,
        },
        AddressType::P2WPKH(net) | AddressType::P2WSH(net) => decode_witness_address(address, net)?,
        // TODO: run xpub/tpub through decode_check and verify the 78-byte BIP32 layout
        AddressType::ExtendedPublicKey(_) => ValidatedAddress {
            address_type,
            payload: DecodedPayload::Unchecked,
        },
        AddressType::Unknown => return Err(AddressError::UnknownFormat),
    };

    if let Some(program) = validated.payload.program() {
        trace!(
            address_type = %validated.address_type,
            program = %hex::encode(program),
            "decoded address payload"
        );
    }

    Ok(validated)
}

/// Check whether an address is valid on the given network.
///
/// Rejection reasons are logged at debug level and otherwise discarded.
pub fn is_valid(address: &str, mode: Network) -> bool {
    match validate(address, mode) {
        Ok(_) => true,
        Err(err) => {
            debug!(address, network = %mode, kind = %err.kind(), error = %err, "address rejected");
            false
        }
    }
}

/// Classify an address without verifying it.
///
/// The returned type says nothing about checksum validity.
pub fn address_type(address: &str) -> AddressType {
    classify(address)
}

/// Decode a Base58Check P2PKH/P2SH address and check its version byte.
fn decode_base58_payload(address: &str, expected_version: u8) -> Result<DecodedPayload, AddressError> {
    // Base58 decoding is quadratic in input length
    if address.len() > MAX_BASE58_ADDRESS_LEN {
        return Err(AddressError::Base58TooLong(address.len()));
    }

    let payload = base58::decode_check(address)?;

    if payload.len() != BASE58_PAYLOAD_LEN {
        return Err(AddressError::InvalidPayloadLength {
            expected: BASE58_PAYLOAD_LEN,
            got: payload.len(),
        });
    }

    let version = payload[0];
    if version != expected_version {
        return Err(AddressError::VersionMismatch { expected: expected_version, got: version });
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok(DecodedPayload::Base58 { version, hash })
}

/// Decode a segwit address; the program length decides P2WPKH vs P2WSH.
fn decode_witness_address(address: &str, network: Network) -> Result<ValidatedAddress, AddressError> {
    let (hrp, version, program) = bech32::decode_segwit(address)?;

    if hrp != network.bech32_hrp() {
        return Err(AddressError::HrpMismatch {
            expected: network.bech32_hrp().to_string(),
            got: hrp,
        });
    }

    let address_type = match program.len() {
        P2WPKH_PROGRAM_LEN => AddressType::P2WPKH(network),
        P2WSH_PROGRAM_LEN => AddressType::P2WSH(network),
        len => return Err(AddressError::InvalidWitnessProgramLength(len)),
    };

    Ok(ValidatedAddress {
        address_type,
        payload: DecodedPayload::Witness { version, program },
    })
}
