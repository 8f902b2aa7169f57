//! Chain environment the zone reads during a call.
//!
//! The zone needs two ambient values: the live chain identifier (for domain
//! separation) and the current block timestamp (for expiration checks).

use crate::utils::current_timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the live chain id and timestamp.
pub trait ChainEnvironment: Send + Sync {
	/// Chain identifier of the chain the call executes on.
	fn chain_id(&self) -> u64;

	/// Current unix timestamp in seconds.
	fn timestamp(&self) -> u64;
}

/// Environment backed by a configured chain id and the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemEnvironment {
	chain_id: u64,
}

impl SystemEnvironment {
	pub fn new(chain_id: u64) -> Self {
		Self { chain_id }
	}
}

impl ChainEnvironment for SystemEnvironment {
	fn chain_id(&self) -> u64 {
		self.chain_id
	}

	fn timestamp(&self) -> u64 {
		current_timestamp()
	}
}

/// Environment with explicitly controlled values.
///
/// Used to replay a validation at a given time or on a forked chain id.
#[derive(Debug, Default)]
pub struct FixedEnvironment {
	chain_id: AtomicU64,
	timestamp: AtomicU64,
}

impl FixedEnvironment {
	pub fn new(chain_id: u64, timestamp: u64) -> Self {
		Self {
			chain_id: AtomicU64::new(chain_id),
			timestamp: AtomicU64::new(timestamp),
		}
	}

	pub fn set_chain_id(&self, chain_id: u64) {
		self.chain_id.store(chain_id, Ordering::SeqCst);
	}

	pub fn set_timestamp(&self, timestamp: u64) {
		self.timestamp.store(timestamp, Ordering::SeqCst);
	}

	pub fn advance(&self, seconds: u64) {
		self.timestamp.fetch_add(seconds, Ordering::SeqCst);
	}
}

impl ChainEnvironment for FixedEnvironment {
	fn chain_id(&self) -> u64 {
		self.chain_id.load(Ordering::SeqCst)
	}

	fn timestamp(&self) -> u64 {
		self.timestamp.load(Ordering::SeqCst)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_environment_updates() {
		let env = FixedEnvironment::new(1, 1_000);
		env.advance(500);
		env.set_chain_id(10);

		assert_eq!(env.timestamp(), 1_500);
		assert_eq!(env.chain_id(), 10);
	}

	#[test]
	fn test_system_environment_uses_clock() {
		let env = SystemEnvironment::new(1);
		assert_eq!(env.chain_id(), 1);
		assert!(env.timestamp() > 0);
	}
}
