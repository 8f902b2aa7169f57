//! EIP-712 domain separator with a construction-time cache.
//!
//! The separator commits to the zone name, version, chain id and zone
//! address. It is computed once when the zone is built and reused for as
//! long as the live chain id matches the one captured then. After a chain
//! split the live chain id differs and the separator is recomputed, so an
//! approval signed for one fork never validates on the other.

use alloy_primitives::{Address, B256};
use zone_types::utils::{compute_domain_hash, NAME_SIGNED_ZONE, VERSION_SIGNED_ZONE};

/// Domain separator cached against the chain id seen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSeparatorCache {
	verifying_contract: Address,
	chain_id: u64,
	separator: B256,
}

impl DomainSeparatorCache {
	/// Captures `chain_id` and precomputes the separator for it.
	pub fn new(verifying_contract: Address, chain_id: u64) -> Self {
		Self {
			verifying_contract,
			chain_id,
			separator: Self::derive(verifying_contract, chain_id),
		}
	}

	/// Returns the separator for `live_chain_id`.
	///
	/// Serves the cached value when the chain id is unchanged and derives a
	/// fresh one otherwise. The cache itself is never rewritten.
	pub fn current_separator(&self, live_chain_id: u64) -> B256 {
		if live_chain_id == self.chain_id {
			self.separator
		} else {
			tracing::debug!(
				cached_chain_id = self.chain_id,
				live_chain_id,
				"Chain id changed, recomputing domain separator"
			);
			Self::derive(self.verifying_contract, live_chain_id)
		}
	}

	/// Address bound into the domain.
	pub fn verifying_contract(&self) -> Address {
		self.verifying_contract
	}

	/// Chain id captured at construction.
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	fn derive(verifying_contract: Address, chain_id: u64) -> B256 {
		compute_domain_hash(
			NAME_SIGNED_ZONE,
			VERSION_SIGNED_ZONE,
			chain_id,
			&verifying_contract,
		)
	}
}
