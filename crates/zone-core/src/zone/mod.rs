//! The signed zone: the object an order-settlement system consults before
//! executing a restricted order.
//!
//! A zone owns the approved signer set, the ownership state gating edits to
//! it, the validation engine and an append-only event log. Mutations go
//! through the owner check and record their event on success; validation is
//! read-only.

use crate::domain::DomainSeparatorCache;
use crate::engine::{OrderValidationEngine, ValidationError};
use alloy_primitives::{Address, FixedBytes, B256};
use std::sync::Arc;
use zone_access::{AccessControl, AccessError, TwoStepOwnable};
use zone_registry::{RegistryError, SignerRegistry};
use zone_signature::RecoveryService;
use zone_types::{ChainEnvironment, EventLog, OrderContext, SignedOrder, ZoneEvent};

/// Snapshot of the values bound into the zone's signing domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainInfo {
	/// Separator for the live chain id.
	pub separator: B256,
	/// Live chain id the separator was computed for.
	pub chain_id: u64,
	/// Zone address.
	pub verifying_contract: Address,
}

/// Off-chain order authorization gate.
pub struct SignedZone {
	engine: OrderValidationEngine,
	registry: SignerRegistry,
	access: Box<dyn AccessControl>,
	environment: Arc<dyn ChainEnvironment>,
	events: EventLog,
}

impl SignedZone {
	/// Creates a zone at `address` owned by `owner`, capturing the
	/// environment's current chain id for the domain separator.
	pub fn new(address: Address, owner: Address, environment: Arc<dyn ChainEnvironment>) -> Self {
		let engine = OrderValidationEngine::new(
			DomainSeparatorCache::new(address, environment.chain_id()),
			RecoveryService::default(),
		);
		Self::from_parts(engine, Box::new(TwoStepOwnable::new(owner)), environment)
	}

	/// Assembles a zone from prebuilt components with an empty signer set.
	pub fn from_parts(
		engine: OrderValidationEngine,
		access: Box<dyn AccessControl>,
		environment: Arc<dyn ChainEnvironment>,
	) -> Self {
		Self {
			engine,
			registry: SignerRegistry::new(),
			access,
			environment,
			events: EventLog::new(),
		}
	}

	/// Zone address (the EIP-712 verifying contract).
	pub fn address(&self) -> Address {
		self.engine.domain().verifying_contract()
	}

	/// Approves `signer`. Owner only.
	pub fn add_signer(&mut self, caller: Address, signer: Address) -> Result<(), RegistryError> {
		let event = self
			.registry
			.add_signer(self.access.as_ref(), caller, signer)?;
		self.events.emit(event);
		Ok(())
	}

	/// Revokes `signer`. Owner only.
	pub fn remove_signer(&mut self, caller: Address, signer: Address) -> Result<(), RegistryError> {
		let event = self
			.registry
			.remove_signer(self.access.as_ref(), caller, signer)?;
		self.events.emit(event);
		Ok(())
	}

	pub fn is_approved(&self, signer: Address) -> bool {
		self.registry.is_approved(signer)
	}

	/// Currently approved signers in ascending address order.
	pub fn approved_signers(&self) -> Vec<Address> {
		self.registry.approved_signers()
	}

	/// Checks an order's authorization payload.
	///
	/// Returns the magic acceptance value or the first rejection reason.
	pub fn validate(
		&self,
		context: &OrderContext,
		extra_data: &[u8],
	) -> Result<FixedBytes<4>, ValidationError> {
		self.engine.validate(
			context,
			extra_data,
			&self.registry,
			self.environment.as_ref(),
		)
	}

	/// Domain separator and its inputs for the live chain.
	pub fn domain_info(&self) -> DomainInfo {
		let chain_id = self.environment.chain_id();
		DomainInfo {
			separator: self.engine.domain().current_separator(chain_id),
			chain_id,
			verifying_contract: self.address(),
		}
	}

	/// EIP-712 digest an authority must sign to approve `message`.
	pub fn signed_order_digest(&self, message: &SignedOrder) -> B256 {
		self.engine
			.signed_order_digest(message, self.environment.chain_id())
	}

	pub fn owner(&self) -> Address {
		self.access.owner()
	}

	pub fn pending_owner(&self) -> Option<Address> {
		self.access.pending_owner()
	}

	/// Proposes `new_owner`. Owner only; takes effect on acceptance.
	pub fn transfer_ownership(
		&mut self,
		caller: Address,
		new_owner: Address,
	) -> Result<(), AccessError> {
		let event = self.access.transfer_ownership(caller, new_owner)?;
		self.events.emit(event);
		Ok(())
	}

	/// Withdraws a pending ownership proposal. Owner only.
	pub fn cancel_ownership_transfer(&mut self, caller: Address) -> Result<(), AccessError> {
		let event = self.access.cancel_ownership_transfer(caller)?;
		self.events.emit(event);
		Ok(())
	}

	/// Completes a pending transfer. Pending owner only.
	pub fn accept_ownership(&mut self, caller: Address) -> Result<(), AccessError> {
		let event = self.access.accept_ownership(caller)?;
		self.events.emit(event);
		Ok(())
	}

	/// All events emitted so far, oldest first.
	pub fn events(&self) -> &[ZoneEvent] {
		self.events.entries()
	}
}
