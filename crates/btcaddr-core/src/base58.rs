//! Base58 and Base58Check encoding.
//!
//! Base58Check appends the first 4 bytes of `SHA256(SHA256(payload))` to the
//! payload before Base58 encoding. Every leading zero byte is written as a
//! leading `1`, and vice versa when decoding.

use crate::error::AddressError;
use crate::hash::{checksum, CHECKSUM_LEN};

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Look up the digit value of a Base58 character.
fn digit_value(c: char) -> Result<u32, AddressError> {
    if !c.is_ascii() {
        return Err(AddressError::InvalidBase58Char(c));
    }
    BASE58_ALPHABET
        .iter()
        .position(|&x| x == c as u8)
        .map(|idx| idx as u32)
        .ok_or(AddressError::InvalidBase58Char(c))
}

/// Decode a Base58 string into bytes.
pub fn decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let leading_zeros = input.chars().take_while(|&c| c == '1').count();

    // Big-endian accumulator, multiplied by 58 for every digit
    let mut result: Vec<u8> = Vec::with_capacity(input.len());
    for c in input.chars() {
        let mut carry = digit_value(c)?;
        for byte in result.iter_mut().rev() {
            let temp = (*byte as u32) * 58 + carry;
            *byte = (temp & 0xFF) as u8;
            carry = temp >> 8;
        }

        while carry > 0 {
            result.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; leading_zeros];
    decoded.extend(result);
    Ok(decoded)
}

/// Encode bytes as a Base58 string.
pub fn encode(data: &[u8]) -> String {
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-58 digits
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[leading_zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            let temp = ((*digit as u32) << 8) + carry;
            *digit = (temp % 58) as u8;
            carry = temp / 58;
        }

        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut encoded = String::with_capacity(leading_zeros + digits.len());
    encoded.extend(core::iter::repeat('1').take(leading_zeros));
    encoded.extend(digits.iter().rev().map(|&d| BASE58_ALPHABET[d as usize] as char));
    encoded
}

/// Decode a Base58Check string and verify its checksum.
///
/// Returns the payload with the 4 checksum bytes removed.
pub fn decode_check(address: &str) -> Result<Vec<u8>, AddressError> {
    let mut decoded = decode(address)?;

    if decoded.len() < CHECKSUM_LEN {
        return Err(AddressError::PayloadTooShort(decoded.len()));
    }

    let split = decoded.len() - CHECKSUM_LEN;
    if decoded[split..] != checksum(&decoded[..split]) {
        return Err(AddressError::InvalidChecksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}

/// Encode a payload as Base58Check.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}
