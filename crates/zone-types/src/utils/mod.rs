//! Utility functions for common type conversions and transformations.
//!
//! This module provides EIP-712 hashing helpers, parsers for the string forms
//! of addresses and hashes, and formatting helpers used in log output.

pub mod conversion;
pub mod eip712;
pub mod formatting;
pub mod helpers;

pub use conversion::{decode_hex, parse_address, parse_b256, parse_u256};
pub use eip712::{
	compute_domain_hash, compute_final_digest, Eip712AbiEncoder, DOMAIN_TYPE, NAME_SIGNED_ZONE,
	SIGNED_ORDER_TYPE, VERSION_SIGNED_ZONE,
};
pub use formatting::{truncate_hash, with_0x_prefix, without_0x_prefix};
pub use helpers::current_timestamp;
