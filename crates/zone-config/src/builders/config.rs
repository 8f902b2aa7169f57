//! Configuration builder for creating test and development configurations.

use crate::{AccessConfig, Config, SignersConfig, ZoneConfig};
use alloy_primitives::Address;

/// Builder for creating `Config` instances with a fluent API.
///
/// Provides an easy way to create test configurations with sensible defaults.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
	chain_id: u64,
	zone_address: Address,
	owner: Address,
	signers: Vec<Address>,
}

impl Default for ConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigBuilder {
	/// Creates a new `ConfigBuilder` with default values suitable for testing.
	pub fn new() -> Self {
		Self {
			chain_id: 1,
			zone_address: Address::repeat_byte(0x20),
			owner: Address::repeat_byte(0xaa),
			signers: Vec::new(),
		}
	}

	/// Sets the deployment chain id.
	pub fn chain_id(mut self, chain_id: u64) -> Self {
		self.chain_id = chain_id;
		self
	}

	/// Sets the zone (verifying contract) address.
	pub fn zone_address(mut self, address: Address) -> Self {
		self.zone_address = address;
		self
	}

	/// Sets the initial owner.
	pub fn owner(mut self, owner: Address) -> Self {
		self.owner = owner;
		self
	}

	/// Adds an initially approved signer.
	pub fn signer(mut self, signer: Address) -> Self {
		self.signers.push(signer);
		self
	}

	/// Builds the `Config` with the configured values.
	pub fn build(self) -> Config {
		Config {
			zone: ZoneConfig {
				chain_id: self.chain_id,
				address: format!("{:#x}", self.zone_address),
			},
			access: AccessConfig {
				owner: format!("{:#x}", self.owner),
			},
			signers: SignersConfig {
				approved: self
					.signers
					.iter()
					.map(|signer| format!("{:#x}", signer))
					.collect(),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_output_parses_back() {
		let signer = Address::repeat_byte(0x01);
		let config = ConfigBuilder::new().chain_id(5).signer(signer).build();

		assert_eq!(config.zone.chain_id, 5);
		assert_eq!(config.zone_address().unwrap(), Address::repeat_byte(0x20));
		assert_eq!(config.owner_address().unwrap(), Address::repeat_byte(0xaa));
		assert_eq!(config.signer_addresses().unwrap(), vec![signer]);
	}
}
