//! Structural address classification.
//!
//! Classification looks only at the prefix and shape of an address string. It
//! never verifies a checksum, so a classified address is not a valid one.

use serde::{Deserialize, Serialize};

use crate::bech32::P2WSH_PROGRAM_LEN;
use crate::network::Network;

/// Bitcoin address type, tagged with the network its prefix belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "network")]
pub enum AddressType {
    /// Legacy pay-to-public-key-hash, Base58Check
    P2PKH(Network),
    /// Pay-to-script-hash, Base58Check
    P2SH(Network),
    /// Native SegWit v0 with a 20-byte program, Bech32
    P2WPKH(Network),
    /// Native SegWit v0 with a 32-byte program, Bech32
    P2WSH(Network),
    /// BIP32 extended public key (xpub/tpub)
    ExtendedPublicKey(Network),
    /// No classification rule matched
    Unknown,
}

impl AddressType {
    /// Network implied by the address prefix, if the type is known.
    pub fn network(&self) -> Option<Network> {
        match *self {
            AddressType::P2PKH(net)
            | AddressType::P2SH(net)
            | AddressType::P2WPKH(net)
            | AddressType::P2WSH(net)
            | AddressType::ExtendedPublicKey(net) => Some(net),
            AddressType::Unknown => None,
        }
    }

    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH(_) => "P2PKH",
            AddressType::P2SH(_) => "P2SH",
            AddressType::P2WPKH(_) => "P2WPKH",
            AddressType::P2WSH(_) => "P2WSH",
            AddressType::ExtendedPublicKey(_) => "BIP32 pubkey",
            AddressType::Unknown => "unknown",
        }
    }

    /// Whether any classification rule matched.
    pub fn is_known(&self) -> bool {
        !matches!(self, AddressType::Unknown)
    }
}

impl core::fmt::Display for AddressType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.network() {
            Some(Network::Testnet) => write!(f, "testnet {}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Classify an address by its prefix.
///
/// | Prefix        | Type                          |
/// |---------------|-------------------------------|
/// | `1`           | P2PKH, mainnet                |
/// | `3`           | P2SH, mainnet                 |
/// | `bc1`         | P2WPKH or P2WSH, mainnet      |
/// | `xpub`        | extended public key, mainnet  |
/// | `m`, `n`      | P2PKH, testnet                |
/// | `2`           | P2SH, testnet                 |
/// | `tb1`         | P2WPKH or P2WSH, testnet      |
/// | `tpub`        | extended public key, testnet  |
pub fn classify(address: &str) -> AddressType {
    for network in Network::ALL {
        if address.starts_with(network.xpub_prefix()) {
            return AddressType::ExtendedPublicKey(network);
        }
        let hrp = network.bech32_hrp();
        if starts_with_ignore_case(address, hrp) && address[hrp.len()..].starts_with('1') {
            return segwit_type(address, network);
        }
    }

    match address.chars().next() {
        Some('1') => AddressType::P2PKH(Network::Mainnet),
        Some('3') => AddressType::P2SH(Network::Mainnet),
        Some('m') | Some('n') => AddressType::P2PKH(Network::Testnet),
        Some('2') => AddressType::P2SH(Network::Testnet),
        _ => AddressType::Unknown,
    }
}

/// Bech32 prefixes are case-insensitive.
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Pick P2WPKH or P2WSH from the number of bytes the data part can carry.
fn segwit_type(address: &str, network: Network) -> AddressType {
    // Data characters between the witness version and the 6-char checksum
    let data_len = address
        .rfind('1')
        .map(|pos| address.len() - pos - 1)
        .unwrap_or(0);
    let program_chars = data_len.saturating_sub(1 + 6);

    if program_chars * 5 / 8 == P2WSH_PROGRAM_LEN {
        AddressType::P2WSH(network)
    } else {
        AddressType::P2WPKH(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mainnet_prefixes() {
        assert_eq!(classify("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"), AddressType::P2PKH(Network::Mainnet));
        assert_eq!(classify("342ftSRCvFHfCeFFBuz4xwbeqnDw6BGUey"), AddressType::P2SH(Network::Mainnet));
        assert_eq!(
            classify("bc1q34aq5drpuwy3wgl9lhup9892qp6svr8ldzyy7c"),
            AddressType::P2WPKH(Network::Mainnet)
        );
        assert_eq!(
            classify("bc1qeklep85ntjz4605drds6aww9u0qr46qzrv5xswd35uhjuj8ahfcqgf6hak"),
            AddressType::P2WSH(Network::Mainnet)
        );
        assert_eq!(classify("xpub661MyMwAqRbcF"), AddressType::ExtendedPublicKey(Network::Mainnet));
    }

    #[test]
    fn test_classify_testnet_prefixes() {
        assert_eq!(classify("mkHS9ne12qx9pS9VojpwU5xtRd4T7X7ZUt"), AddressType::P2PKH(Network::Testnet));
        assert_eq!(classify("n3GNqMveyvaPvUbH469vDRadqpJMPc84JA"), AddressType::P2PKH(Network::Testnet));
        assert_eq!(classify("2MzQwSSnBHWHqSAqtTVQ6v47XtaisrJa1Vc"), AddressType::P2SH(Network::Testnet));
        assert_eq!(
            classify("tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx"),
            AddressType::P2WPKH(Network::Testnet)
        );
        assert_eq!(
            classify("tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7"),
            AddressType::P2WSH(Network::Testnet)
        );
        assert_eq!(classify("tpubD6NzVbkrYhZ4X"), AddressType::ExtendedPublicKey(Network::Testnet));
    }

    #[test]
    fn test_classify_uppercase_bech32() {
        assert_eq!(
            classify("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4"),
            AddressType::P2WPKH(Network::Mainnet)
        );
    }

    #[test]
    fn test_classify_does_not_check_validity() {
        // Bad checksum still classifies
        assert_eq!(classify("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb"), AddressType::P2PKH(Network::Mainnet));
        assert_eq!(classify("1"), AddressType::P2PKH(Network::Mainnet));
        assert_eq!(classify("bc1"), AddressType::P2WPKH(Network::Mainnet));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(""), AddressType::Unknown);
        assert_eq!(classify("bc"), AddressType::Unknown);
        assert_eq!(classify("bcx1qw508d6"), AddressType::Unknown);
        assert_eq!(classify("ltc1qw508d6"), AddressType::Unknown);
        assert_eq!(classify(" 1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"), AddressType::Unknown);
        assert_eq!(classify("M1A1zP1eP5QGefi2"), AddressType::Unknown);
        assert_eq!(classify("é"), AddressType::Unknown);
        assert_eq!(classify("04678afdb0fe5548271967f1a67130b7"), AddressType::Unknown);
    }

    #[test]
    fn test_address_type_accessors() {
        assert_eq!(AddressType::P2SH(Network::Testnet).network(), Some(Network::Testnet));
        assert_eq!(AddressType::Unknown.network(), None);
        assert!(!AddressType::Unknown.is_known());
        assert_eq!(AddressType::P2WSH(Network::Mainnet).to_string(), "P2WSH");
        assert_eq!(AddressType::P2PKH(Network::Testnet).to_string(), "testnet P2PKH");
    }

    #[test]
    fn test_address_type_serde() {
        let json = serde_json::to_string(&AddressType::P2WPKH(Network::Testnet)).unwrap();
        assert_eq!(json, r#"{"type":"P2WPKH","network":"testnet"}"#);
        let unknown = serde_json::to_string(&AddressType::Unknown).unwrap();
        assert_eq!(unknown, r#"{"type":"Unknown"}"#);
    }
}
