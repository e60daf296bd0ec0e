//! Bech32 (BIP-173) encoding and segwit v0 address decoding.

use crate::error::AddressError;

const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between the human-readable part and the data part.
const SEPARATOR: char = '1';

/// Number of checksum characters at the end of the data part.
const CHECKSUM_LEN: usize = 6;

/// Minimum total length: 1-char HRP, separator, 6-char checksum.
pub const MIN_LENGTH: usize = 8;

/// Maximum total length of a Bech32 string.
pub const MAX_LENGTH: usize = 90;

/// Witness program length of P2WPKH.
pub const P2WPKH_PROGRAM_LEN: usize = 20;

/// Witness program length of P2WSH.
pub const P2WSH_PROGRAM_LEN: usize = 32;

/// Decode a Bech32 string into its lowercase HRP and 5-bit data values.
///
/// The returned data excludes the 6 checksum values.
pub fn decode(address: &str) -> Result<(String, Vec<u8>), AddressError> {
    if let Some(c) = address.chars().find(|c| !(c.is_ascii_graphic())) {
        return Err(AddressError::InvalidBech32Char(c));
    }

    let has_lower = address.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = address.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&address.len()) {
        return Err(AddressError::InvalidBech32Length(address.len()));
    }

    let input_lower = address.to_ascii_lowercase();

    let sep_pos = input_lower.rfind(SEPARATOR).ok_or(AddressError::InvalidSeparator)?;
    if sep_pos == 0 || sep_pos + CHECKSUM_LEN + 1 > input_lower.len() {
        return Err(AddressError::InvalidSeparator);
    }

    let hrp = &input_lower[..sep_pos];
    let data_part = &input_lower[sep_pos + 1..];

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.chars() {
        let idx = BECH32_CHARSET.find(c).ok_or(AddressError::InvalidBech32Char(c))?;
        data.push(idx as u8);
    }

    if polymod(&hrp_expand(hrp), &data) != 1 {
        return Err(AddressError::InvalidChecksum);
    }

    data.truncate(data.len() - CHECKSUM_LEN);
    Ok((hrp.to_string(), data))
}

/// Decode a segwit v0 address into `(hrp, witness_version, witness_program)`.
pub fn decode_segwit(address: &str) -> Result<(String, u8, Vec<u8>), AddressError> {
    let (hrp, data) = decode(address)?;

    let (&witness_version, program_data) = data
        .split_first()
        .ok_or(AddressError::InvalidWitnessProgramLength(0))?;

    // Taproot (v1) and later versions use Bech32m, which this decoder does not verify
    if witness_version != 0 {
        return Err(AddressError::UnsupportedWitnessVersion(witness_version));
    }

    let program = convert_bits(program_data, 5, 8, false)?;
    match program.len() {
        P2WPKH_PROGRAM_LEN | P2WSH_PROGRAM_LEN => Ok((hrp, witness_version, program)),
        len => Err(AddressError::InvalidWitnessProgramLength(len)),
    }
}

/// Encode an HRP and 5-bit data values as a lowercase Bech32 string.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, AddressError> {
    if let Some(c) = hrp.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(AddressError::InvalidBech32Char(c));
    }
    if let Some(&v) = data.iter().find(|&&v| v >> 5 != 0) {
        return Err(AddressError::InvalidDataValue(v));
    }

    let hrp = hrp.to_ascii_lowercase();
    let total_len = hrp.len() + 1 + data.len() + CHECKSUM_LEN;
    if hrp.is_empty() || total_len > MAX_LENGTH {
        return Err(AddressError::InvalidBech32Length(total_len));
    }

    let mut values = hrp_expand(&hrp);
    values.extend_from_slice(data);
    let checksum = polymod(&values, &[0; CHECKSUM_LEN]) ^ 1;

    let charset = BECH32_CHARSET.as_bytes();
    let mut encoded = String::with_capacity(total_len);
    encoded.push_str(&hrp);
    encoded.push(SEPARATOR);
    encoded.extend(data.iter().map(|&v| charset[v as usize] as char));
    encoded.extend((0..CHECKSUM_LEN).map(|i| {
        let v = (checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 31;
        charset[v as usize] as char
    }));

    Ok(encoded)
}

/// Encode a witness program as a segwit address.
pub fn encode_segwit(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String, AddressError> {
    if witness_version > 16 {
        return Err(AddressError::UnsupportedWitnessVersion(witness_version));
    }

    let mut data = vec![witness_version];
    data.extend(convert_bits(program, 8, 5, true)?);
    encode(hrp, &data)
}

/// Expand the HRP into the values checksummed before the data part.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);

    for c in hrp.bytes() {
        result.push(c >> 5);
    }
    result.push(0);
    for c in hrp.bytes() {
        result.push(c & 31);
    }

    result
}

fn polymod(hrp: &[u8], data: &[u8]) -> u32 {
    const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

    let mut chk: u32 = 1;

    for &value in hrp.iter().chain(data.iter()) {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (value as u32);
        for (i, &g) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }

    chk
}

/// Regroup a sequence of `from_bits`-wide values into `to_bits`-wide values.
fn convert_bits(data: &[u8], from_bits: u8, to_bits: u8, pad: bool) -> Result<Vec<u8>, AddressError> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);
    let max_value = (1u32 << to_bits) - 1;

    for &value in data {
        if (value as u32) >> from_bits != 0 {
            return Err(AddressError::InvalidPadding);
        }
        acc = (acc << from_bits) | (value as u32);
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(AddressError::InvalidPadding);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_p2wpkh() {
        let (hrp, version, program) = decode_segwit("bc1q34aq5drpuwy3wgl9lhup9892qp6svr8ldzyy7c").unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(version, 0);
        assert_eq!(hex::encode(program), "8d7a0a3461e3891723e5fdf8129caa0075060cff");
    }

    #[test]
    fn test_decode_p2wsh() {
        let (hrp, _, program) =
            decode_segwit("bc1qeklep85ntjz4605drds6aww9u0qr46qzrv5xswd35uhjuj8ahfcqgf6hak").unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(program.len(), 32);
        assert_eq!(
            hex::encode(program),
            "cdbf909e935c855d3e8d1b61aeb9c5e3c03ae8021b286839b1a72f2e48fdba70"
        );
    }

    #[test]
    fn test_decode_uppercase() {
        let (hrp, _, program) = decode_segwit("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4").unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(hex::encode(program), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    fn test_mixed_case_rejected_before_checksum() {
        // Valid checksum once lowercased
        assert_eq!(decode("bc1qW508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"), Err(AddressError::MixedCase));
        // Invalid checksum as well
        assert_eq!(decode("Bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5"), Err(AddressError::MixedCase));
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(decode("a1qqqqq"), Err(AddressError::InvalidBech32Length(7)));
        let too_long = format!("bc1{}", "q".repeat(88));
        assert_eq!(decode(&too_long), Err(AddressError::InvalidBech32Length(91)));
    }

    #[test]
    fn test_separator_rules() {
        assert_eq!(decode("bcqqqqqqqq"), Err(AddressError::InvalidSeparator));
        assert_eq!(decode("1qqqqqqqqq"), Err(AddressError::InvalidSeparator));
        assert_eq!(decode("bcqqqqq1qqqqq"), Err(AddressError::InvalidSeparator));
    }

    #[test]
    fn test_invalid_characters() {
        // 'b' is not in the data charset
        assert_eq!(
            decode("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3tb"),
            Err(AddressError::InvalidBech32Char('b'))
        );
        assert_eq!(decode("bc1 qw508d6qejxtdg4y5r3z"), Err(AddressError::InvalidBech32Char(' ')));
    }

    #[test]
    fn test_invalid_checksum() {
        assert_eq!(
            decode("bc1q34aq5drpuwy3wgl9lhup9892qp6svr8ldzyy7q"),
            Err(AddressError::InvalidChecksum)
        );
    }

    #[test]
    fn test_program_length_checked_after_valid_checksum() {
        // Valid Bech32 checksum over a 25-byte program
        let address = "bc1qqqqsyqcyq5rqwzqfpg9scrgwpugpzysnzs23v9cc7vgsh7";
        assert!(decode(address).is_ok());
        assert_eq!(decode_segwit(address), Err(AddressError::InvalidWitnessProgramLength(25)));
    }

    #[test]
    fn test_non_zero_witness_version_rejected() {
        let address = "bc1pw46h2at4w46h2at4w46h2at4w46h2at4puxyfz";
        assert!(decode(address).is_ok());
        assert_eq!(decode_segwit(address), Err(AddressError::UnsupportedWitnessVersion(1)));
    }

    #[test]
    fn test_taproot_bech32m_checksum_rejected() {
        let address = "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr";
        assert_eq!(decode(address), Err(AddressError::InvalidChecksum));
    }

    #[test]
    fn test_encode_segwit_matches_known_addresses() {
        let program = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(
            encode_segwit("tb", 0, &program).unwrap(),
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx"
        );
        assert_eq!(
            encode_segwit("BC", 0, &program).unwrap(),
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"
        );
    }

    #[test]
    fn test_encode_rejects_out_of_range_values() {
        assert_eq!(encode("bc", &[0, 32]), Err(AddressError::InvalidDataValue(32)));
        assert!(encode("", &[0]).is_err());
    }
}
