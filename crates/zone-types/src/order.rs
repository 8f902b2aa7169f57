//! Order types for the zone.
//!
//! This module defines the per-call order context supplied by the settlement
//! system and the EIP-712 `SignedOrder` struct that the off-chain authority
//! signs to approve an order.

use crate::utils::{Eip712AbiEncoder, SIGNED_ORDER_TYPE};
use alloy_primitives::{keccak256, Address, B256, U256};
use serde::{Deserialize, Serialize};

/// Context supplied by the caller for each validation request.
///
/// The zone never computes the order hash itself; it only binds the signature
/// to the value the settlement system passes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderContext {
	/// Unique fingerprint of the order being settled.
	pub order_hash: B256,
	/// Address actually executing (fulfilling) the order.
	pub actual_executor: Address,
}

impl OrderContext {
	pub fn new(order_hash: B256, actual_executor: Address) -> Self {
		Self {
			order_hash,
			actual_executor,
		}
	}
}

/// The EIP-712 struct signed off-chain by an approved signer.
///
/// Hashes as `SignedOrder(address fulfiller,uint256 expiration,bytes32 orderHash)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
	/// Executor the authority expects; the zero address means anyone.
	pub fulfiller: Address,
	/// Unix timestamp (seconds) after which the approval is void.
	pub expiration: U256,
	/// Order the approval applies to.
	pub order_hash: B256,
}

impl SignedOrder {
	/// Returns `keccak256(SIGNED_ORDER_TYPE)`.
	pub fn type_hash() -> B256 {
		keccak256(SIGNED_ORDER_TYPE.as_bytes())
	}

	/// Computes the EIP-712 struct hash of this message.
	pub fn struct_hash(&self) -> B256 {
		let mut enc = Eip712AbiEncoder::new();
		enc.push_b256(&Self::type_hash());
		enc.push_address(&self.fulfiller);
		enc.push_u256(self.expiration);
		enc.push_b256(&self.order_hash);
		keccak256(enc.finish())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{address, b256};

	#[test]
	fn test_type_hash() {
		assert_eq!(
			SignedOrder::type_hash(),
			b256!("a1b05968f78cdf9ff55299b045b98a4dd8a1ad93d3eeeb74dbbac184bc878bdb")
		);
	}

	#[test]
	fn test_struct_hash_known_value() {
		let message = SignedOrder {
			fulfiller: address!("1111111111111111111111111111111111111111"),
			expiration: U256::from(1_700_003_600u64),
			order_hash: B256::repeat_byte(0x42),
		};

		assert_eq!(
			message.struct_hash(),
			b256!("f326b14e9d83e021a4d95465cabb8cbd7a06d662b8948dbe5a0c69d952b792a9")
		);
	}

	#[test]
	fn test_struct_hash_binds_every_field() {
		let base = SignedOrder {
			fulfiller: Address::ZERO,
			expiration: U256::from(100u64),
			order_hash: B256::repeat_byte(0x01),
		};
		let other_executor = SignedOrder {
			fulfiller: Address::repeat_byte(0x01),
			..base
		};
		let other_expiration = SignedOrder {
			expiration: U256::from(101u64),
			..base
		};
		let other_order = SignedOrder {
			order_hash: B256::repeat_byte(0x02),
			..base
		};

		assert_ne!(base.struct_hash(), other_executor.struct_hash());
		assert_ne!(base.struct_hash(), other_expiration.struct_hash());
		assert_ne!(base.struct_hash(), other_order.struct_hash());
	}
}
