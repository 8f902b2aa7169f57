//! Signer registry module for the signed zone.
//!
//! Maintains the set of addresses whose signatures are accepted. Membership
//! is a plain `address -> bool` map: removal tombstones an entry to `false`
//! instead of deleting it. Mutations are gated by an [`AccessControl`] check
//! on the caller and leave the map untouched when they fail.

use alloy_primitives::Address;
use std::collections::HashMap;
use thiserror::Error;
use zone_access::{AccessControl, AccessError};
use zone_types::ZoneEvent;

/// Errors that can occur during signer registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// The caller failed the ownership check.
	#[error("Unauthorized: {0}")]
	Unauthorized(#[from] AccessError),
	/// The zero address can never be a signer.
	#[error("Zero address is not allowed as a signer")]
	ZeroAddressNotAllowed,
	/// The signer is already approved.
	#[error("Signer {0} is already registered")]
	AlreadyRegistered(Address),
	/// The signer is not currently approved.
	#[error("Signer {0} is not registered")]
	NotRegistered(Address),
}

/// Registry of approved signers.
#[derive(Debug, Clone, Default)]
pub struct SignerRegistry {
	/// Membership flags; `false` marks a removed signer.
	signers: HashMap<Address, bool>,
}

impl SignerRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Approves `signer`.
	///
	/// Fails for non-owner callers, the zero address and already-approved
	/// signers; emits `SignerAdded` otherwise.
	pub fn add_signer(
		&mut self,
		access: &dyn AccessControl,
		caller: Address,
		signer: Address,
	) -> Result<ZoneEvent, RegistryError> {
		access.require_owner(caller)?;
		if signer == Address::ZERO {
			return Err(RegistryError::ZeroAddressNotAllowed);
		}
		if self.is_approved(signer) {
			return Err(RegistryError::AlreadyRegistered(signer));
		}

		self.signers.insert(signer, true);
		tracing::info!(signer = %signer, "Signer added");
		Ok(ZoneEvent::SignerAdded { signer })
	}

	/// Revokes `signer`.
	///
	/// Fails for non-owner callers and signers that are not currently
	/// approved; emits `SignerRemoved` otherwise.
	pub fn remove_signer(
		&mut self,
		access: &dyn AccessControl,
		caller: Address,
		signer: Address,
	) -> Result<ZoneEvent, RegistryError> {
		access.require_owner(caller)?;
		if !self.is_approved(signer) {
			return Err(RegistryError::NotRegistered(signer));
		}

		self.signers.insert(signer, false);
		tracing::info!(signer = %signer, "Signer removed");
		Ok(ZoneEvent::SignerRemoved { signer })
	}

	/// Returns true if `signer` is currently approved.
	pub fn is_approved(&self, signer: Address) -> bool {
		self.signers.get(&signer).copied().unwrap_or(false)
	}

	/// Returns all currently approved signers in ascending address order.
	pub fn approved_signers(&self) -> Vec<Address> {
		let mut approved: Vec<Address> = self
			.signers
			.iter()
			.filter_map(|(signer, approved)| approved.then_some(*signer))
			.collect();
		approved.sort();
		approved
	}
}
