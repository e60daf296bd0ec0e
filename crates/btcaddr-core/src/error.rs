//! Address validation errors.

use serde::Serialize;
use thiserror::Error;

use crate::network::Network;

/// Why an address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Character outside the Base58 alphabet
    #[error("Invalid Base58 character: {0}")]
    InvalidBase58Char(char),
    /// Character outside the Bech32 charset (or not printable ASCII)
    #[error("Invalid Bech32 character: {0}")]
    InvalidBech32Char(char),
    /// Bech32 string mixes upper and lower case
    #[error("Mixed-case Bech32 string")]
    MixedCase,
    /// Bech32 string shorter than 8 or longer than 90 characters
    #[error("Invalid Bech32 length: {0}")]
    InvalidBech32Length(usize),
    /// Separator missing, HRP empty, or data part shorter than the checksum
    #[error("Invalid Bech32 separator position")]
    InvalidSeparator,
    /// Non-zero bits left over after regrouping 5-bit values into bytes
    #[error("Invalid Bech32 padding")]
    InvalidPadding,
    /// Base58 address longer than any P2PKH/P2SH encoding
    #[error("Base58 address too long: {0} characters")]
    Base58TooLong(usize),
    /// Bech32 data value outside the 5-bit range
    #[error("Invalid Bech32 data value: {0}")]
    InvalidDataValue(u8),
    /// Base58 string decoded to fewer bytes than a checksum
    #[error("Decoded payload too short: {0} bytes")]
    PayloadTooShort(usize),
    /// Base58Check payload is not version byte + 20-byte hash
    #[error("Invalid payload length: expected {expected}, got {got}")]
    InvalidPayloadLength { expected: usize, got: usize },
    /// Witness program is neither 20 nor 32 bytes
    #[error("Invalid witness program length: {0}")]
    InvalidWitnessProgramLength(usize),
    /// Witness version other than 0
    #[error("Unsupported witness version: {0}")]
    UnsupportedWitnessVersion(u8),
    /// Base58Check version byte disagrees with the address prefix
    #[error("Version byte mismatch: expected {expected:#04x}, got {got:#04x}")]
    VersionMismatch { expected: u8, got: u8 },
    /// Bech32 HRP disagrees with the address network
    #[error("HRP mismatch: expected {expected}, got {got}")]
    HrpMismatch { expected: String, got: String },
    /// Recomputed checksum differs from the embedded one
    #[error("Invalid checksum")]
    InvalidChecksum,
    /// No classifier rule matches the address shape
    #[error("Unknown address format")]
    UnknownFormat,
    /// Address belongs to a different network than the one in use
    #[error("Address network mismatch: expected {expected}, got {got}")]
    NetworkMismatch { expected: Network, got: Network },
}

/// Coarse category of an [`AddressError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Charset,
    Case,
    Length,
    Checksum,
    UnknownFormat,
    /// Prefix matched, but the decoded version byte or HRP contradicts it
    Prefix,
    Network,
}

impl AddressError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::InvalidBase58Char(_)
            | AddressError::InvalidBech32Char(_)
            | AddressError::InvalidDataValue(_) => ErrorKind::Charset,
            AddressError::MixedCase => ErrorKind::Case,
            AddressError::InvalidBech32Length(_)
            | AddressError::Base58TooLong(_)
            | AddressError::InvalidSeparator
            | AddressError::InvalidPadding
            | AddressError::PayloadTooShort(_)
            | AddressError::InvalidPayloadLength { .. }
            | AddressError::InvalidWitnessProgramLength(_) => ErrorKind::Length,
            AddressError::InvalidChecksum => ErrorKind::Checksum,
            AddressError::UnsupportedWitnessVersion(_) | AddressError::UnknownFormat => ErrorKind::UnknownFormat,
            AddressError::VersionMismatch { .. } | AddressError::HrpMismatch { .. } => ErrorKind::Prefix,
            AddressError::NetworkMismatch { .. } => ErrorKind::Network,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ErrorKind::Charset => "charset",
            ErrorKind::Case => "case",
            ErrorKind::Length => "length",
            ErrorKind::Checksum => "checksum",
            ErrorKind::UnknownFormat => "unknown_format",
            ErrorKind::Prefix => "prefix",
            ErrorKind::Network => "network",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AddressError::InvalidBase58Char('0').kind(), ErrorKind::Charset);
        assert_eq!(AddressError::MixedCase.kind(), ErrorKind::Case);
        assert_eq!(AddressError::InvalidWitnessProgramLength(25).kind(), ErrorKind::Length);
        assert_eq!(AddressError::InvalidChecksum.kind(), ErrorKind::Checksum);
        assert_eq!(AddressError::UnknownFormat.kind(), ErrorKind::UnknownFormat);
        assert_eq!(AddressError::Base58TooLong(36).kind(), ErrorKind::Length);
        assert_eq!(AddressError::InvalidDataValue(32).kind(), ErrorKind::Charset);
        assert_eq!(AddressError::VersionMismatch { expected: 0x05, got: 0x06 }.kind(), ErrorKind::Prefix);
        assert_eq!(
            AddressError::HrpMismatch { expected: "bc".into(), got: "bc1x".into() }.kind(),
            ErrorKind::Prefix
        );
        assert_eq!(
            AddressError::NetworkMismatch { expected: Network::Testnet, got: Network::Mainnet }.kind(),
            ErrorKind::Network
        );
    }

    #[test]
    fn test_error_display() {
        let err = AddressError::VersionMismatch { expected: 0x05, got: 0x00 };
        assert_eq!(err.to_string(), "Version byte mismatch: expected 0x05, got 0x00");

        let err = AddressError::NetworkMismatch { expected: Network::Testnet, got: Network::Mainnet };
        assert_eq!(err.to_string(), "Address network mismatch: expected testnet, got mainnet");
    }
}
