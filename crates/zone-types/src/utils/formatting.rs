//! String formatting utilities.
//!
//! Provides functions for formatting hashes and hex strings for display,
//! mostly used when logging validation decisions.

use alloy_primitives::B256;

/// Truncates a hash for display purposes.
///
/// Shows the `0x` prefix and the first 8 hex characters followed by "..".
pub fn truncate_hash(hash: &B256) -> String {
	let full = format!("{:x}", hash);
	format!("0x{}..", &full[..8])
}

/// Adds "0x" prefix to a hex string if it doesn't already have one.
///
/// # Arguments
///
/// * `hex_str` - A hex string that may or may not have "0x" prefix
///
/// # Returns
///
/// A hex string with "0x" prefix.
pub fn with_0x_prefix(hex_str: &str) -> String {
	if hex_str.to_lowercase().starts_with("0x") {
		hex_str.to_string()
	} else {
		format!("0x{}", hex_str)
	}
}

/// Removes "0x" prefix from a hex string if present.
///
/// This function removes the "0x" or "0X" prefix from a hex string if present,
/// returning the hex string without prefix.
pub fn without_0x_prefix(hex_str: &str) -> &str {
	hex_str
		.strip_prefix("0x")
		.or_else(|| hex_str.strip_prefix("0X"))
		.unwrap_or(hex_str)
}
