//! Builder for constructing a signed zone from configuration.
//!
//! Parses the configured addresses, captures the deployment chain id into the
//! domain separator cache and registers the initial signer set on behalf of
//! the configured owner, so startup signers show up in the event log like any
//! other addition.

use crate::domain::DomainSeparatorCache;
use crate::engine::OrderValidationEngine;
use crate::zone::SignedZone;
use std::sync::Arc;
use thiserror::Error;
use zone_access::{AccessControl, TwoStepOwnable};
use zone_config::Config;
use zone_signature::{RecoveryInterface, RecoveryService};
use zone_types::{ChainEnvironment, SystemEnvironment};

/// Errors that can occur during zone construction.
#[derive(Debug, Error)]
pub enum BuilderError {
	#[error("Configuration error: {0}")]
	Config(String),
	#[error("Failed to register initial signer: {0}")]
	Signer(String),
}

/// Builder for constructing a [`SignedZone`] with pluggable components.
pub struct ZoneBuilder {
	config: Config,
	environment: Option<Arc<dyn ChainEnvironment>>,
	recovery: Option<Box<dyn RecoveryInterface>>,
}

impl ZoneBuilder {
	/// Creates a new ZoneBuilder with the given configuration.
	pub fn new(config: Config) -> Self {
		Self {
			config,
			environment: None,
			recovery: None,
		}
	}

	/// Overrides the chain environment.
	///
	/// Defaults to the configured chain id and the system clock.
	pub fn with_environment(mut self, environment: Arc<dyn ChainEnvironment>) -> Self {
		self.environment = Some(environment);
		self
	}

	/// Overrides the signature recovery backend. Defaults to secp256k1.
	pub fn with_recovery(mut self, recovery: Box<dyn RecoveryInterface>) -> Self {
		self.recovery = Some(recovery);
		self
	}

	/// Builds the zone and approves the configured signers.
	pub fn build(self) -> Result<SignedZone, BuilderError> {
		let address = self
			.config
			.zone_address()
			.map_err(|e| BuilderError::Config(e.to_string()))?;
		let owner = self
			.config
			.owner_address()
			.map_err(|e| BuilderError::Config(e.to_string()))?;
		let signers = self
			.config
			.signer_addresses()
			.map_err(|e| BuilderError::Config(e.to_string()))?;

		let chain_id = self.config.zone.chain_id;
		let environment = self
			.environment
			.unwrap_or_else(|| Arc::new(SystemEnvironment::new(chain_id)));
		let recovery = self
			.recovery
			.map(RecoveryService::new)
			.unwrap_or_default();

		let engine =
			OrderValidationEngine::new(DomainSeparatorCache::new(address, chain_id), recovery);
		let access: Box<dyn AccessControl> = Box::new(TwoStepOwnable::new(owner));
		let mut zone = SignedZone::from_parts(engine, access, environment);

		for signer in signers {
			zone.add_signer(owner, signer)
				.map_err(|e| BuilderError::Signer(e.to_string()))?;
		}

		tracing::info!(
			component = "zone",
			address = %address,
			chain_id,
			owner = %owner,
			signers = zone.approved_signers().len(),
			"Loaded"
		);
		Ok(zone)
	}
}
