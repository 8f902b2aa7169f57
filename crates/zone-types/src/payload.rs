//! Authorization payload carried in an order's `extraData`.
//!
//! The payload has a fixed layout:
//!
//! | bytes      | field                                    |
//! |------------|------------------------------------------|
//! | `[0, 20)`  | expected executor (zero = unrestricted)  |
//! | `[20, 52)` | expiration, big-endian uint256           |
//! | `[52, ..)` | signature (64 or 65 bytes by convention) |
//!
//! Everything after byte 52 is the signature, including any trailing bytes.

use crate::SignedOrder;
use alloy_primitives::{Address, B256, U256};
use thiserror::Error;

/// Errors that can occur while decoding an authorization payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
	/// The blob cannot hold the fixed executor and expiration fields.
	#[error("Extra data too short: {length} bytes (minimum {minimum})")]
	TooShort { length: usize, minimum: usize },
}

/// Decoded view over an authorization payload.
///
/// Borrows the signature from the input blob; the fixed fields are copied
/// into value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationPayload<'a> {
	/// Executor the authority expects; the zero address means anyone.
	pub expected_executor: Address,
	/// Unix timestamp (seconds) after which the approval is void.
	pub expiration: U256,
	/// Raw signature bytes.
	pub signature: &'a [u8],
}

impl<'a> AuthorizationPayload<'a> {
	/// Width of the expected-executor field.
	pub const EXECUTOR_LEN: usize = 20;
	/// Width of the expiration field.
	pub const EXPIRATION_LEN: usize = 32;
	/// Offset at which the signature starts.
	pub const SIGNATURE_OFFSET: usize = Self::EXECUTOR_LEN + Self::EXPIRATION_LEN;

	/// Decodes a payload, validating the total length up front.
	pub fn decode(extra_data: &'a [u8]) -> Result<Self, PayloadError> {
		if extra_data.len() < Self::SIGNATURE_OFFSET {
			return Err(PayloadError::TooShort {
				length: extra_data.len(),
				minimum: Self::SIGNATURE_OFFSET,
			});
		}

		let (executor, rest) = extra_data.split_at(Self::EXECUTOR_LEN);
		let (expiration, signature) = rest.split_at(Self::EXPIRATION_LEN);

		Ok(Self {
			expected_executor: Address::from_slice(executor),
			expiration: U256::from_be_slice(expiration),
			signature,
		})
	}

	/// Builds the EIP-712 message this payload claims was signed.
	pub fn signed_order(&self, order_hash: B256) -> SignedOrder {
		SignedOrder {
			fulfiller: self.expected_executor,
			expiration: self.expiration,
			order_hash,
		}
	}

	/// Returns true when any executor may fill the order.
	pub fn is_unrestricted(&self) -> bool {
		self.expected_executor == Address::ZERO
	}

	/// Encodes the fields back into the wire layout.
	pub fn encode(expected_executor: Address, expiration: U256, signature: &[u8]) -> Vec<u8> {
		let mut out = Vec::with_capacity(Self::SIGNATURE_OFFSET + signature.len());
		out.extend_from_slice(expected_executor.as_slice());
		out.extend_from_slice(&expiration.to_be_bytes::<32>());
		out.extend_from_slice(signature);
		out
	}
}
