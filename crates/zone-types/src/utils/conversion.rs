//! Conversion utilities for common data transformations.
//!
//! This module parses the string forms of addresses, hashes and byte blobs
//! that arrive through configuration files and the command line.

use super::formatting::without_0x_prefix;
use alloy_primitives::{hex, Address, B256, U256};

/// Parses a 20-byte address from a hex string, with or without "0x" prefix.
///
/// Mixed-case input is accepted without checksum enforcement.
pub fn parse_address(value: &str) -> Result<Address, String> {
	let bytes = decode_hex(value)?;
	if bytes.len() != 20 {
		return Err(format!(
			"Expected 20-byte address, got {} bytes: {}",
			bytes.len(),
			value
		));
	}
	Ok(Address::from_slice(&bytes))
}

/// Parses a 32-byte hash from a hex string.
pub fn parse_b256(value: &str) -> Result<B256, String> {
	let bytes = decode_hex(value)?;
	if bytes.len() != 32 {
		return Err(format!(
			"Expected 32-byte hash, got {} bytes: {}",
			bytes.len(),
			value
		));
	}
	Ok(B256::from_slice(&bytes))
}

/// Parses an unsigned 256-bit integer from a decimal or "0x"-prefixed hex string.
pub fn parse_u256(value: &str) -> Result<U256, String> {
	let trimmed = value.trim();
	let parsed = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
		U256::from_str_radix(without_0x_prefix(trimmed), 16)
	} else {
		U256::from_str_radix(trimmed, 10)
	};
	parsed.map_err(|e| format!("Invalid integer '{}': {}", value, e))
}

/// Decodes an arbitrary-length hex blob.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, String> {
	hex::decode(without_0x_prefix(value.trim()))
		.map_err(|e| format!("Invalid hex '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn test_parse_address() {
		let parsed = parse_address("0x5FbDB2315678afecb367f032d93F642f64180aa3").unwrap();
		assert_eq!(parsed, address!("5fbdb2315678afecb367f032d93f642f64180aa3"));

		let unprefixed = parse_address("5fbdb2315678afecb367f032d93f642f64180aa3").unwrap();
		assert_eq!(parsed, unprefixed);

		assert!(parse_address("0x1234").is_err());
		assert!(parse_address("0xzz").is_err());
	}

	#[test]
	fn test_parse_b256() {
		let hash = parse_b256(&format!("0x{}", "42".repeat(32))).unwrap();
		assert_eq!(hash, B256::repeat_byte(0x42));
		assert!(parse_b256("0x42").is_err());
	}

	#[test]
	fn test_parse_u256() {
		assert_eq!(parse_u256("1700003600").unwrap(), U256::from(1_700_003_600u64));
		assert_eq!(parse_u256("0x10").unwrap(), U256::from(16u64));
		assert!(parse_u256("-1").is_err());
	}
}
