//! Two-step ownable implementation.

use crate::{AccessControl, AccessError};
use alloy_primitives::Address;
use zone_types::ZoneEvent;

/// Ownership state with a pending-owner handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoStepOwnable {
	owner: Address,
	pending_owner: Option<Address>,
}

impl TwoStepOwnable {
	/// Creates the ownership state with `owner` as the initial owner.
	pub fn new(owner: Address) -> Self {
		Self {
			owner,
			pending_owner: None,
		}
	}
}

impl AccessControl for TwoStepOwnable {
	fn owner(&self) -> Address {
		self.owner
	}

	fn pending_owner(&self) -> Option<Address> {
		self.pending_owner
	}

	fn transfer_ownership(
		&mut self,
		caller: Address,
		new_owner: Address,
	) -> Result<ZoneEvent, AccessError> {
		self.require_owner(caller)?;
		if new_owner == Address::ZERO {
			return Err(AccessError::NewOwnerIsZeroAddress);
		}
		if new_owner == self.owner {
			return Err(AccessError::NewOwnerIsOwner(new_owner));
		}

		self.pending_owner = Some(new_owner);
		tracing::info!(owner = %self.owner, pending = %new_owner, "Ownership transfer started");
		Ok(ZoneEvent::OwnershipTransferStarted {
			previous_owner: self.owner,
			pending_owner: new_owner,
		})
	}

	fn cancel_ownership_transfer(&mut self, caller: Address) -> Result<ZoneEvent, AccessError> {
		self.require_owner(caller)?;
		let pending_owner = self
			.pending_owner
			.take()
			.ok_or(AccessError::NoPendingTransfer)?;

		tracing::info!(pending = %pending_owner, "Ownership transfer canceled");
		Ok(ZoneEvent::OwnershipTransferCanceled { pending_owner })
	}

	fn accept_ownership(&mut self, caller: Address) -> Result<ZoneEvent, AccessError> {
		match self.pending_owner {
			None => Err(AccessError::NoPendingTransfer),
			Some(pending) if pending != caller => Err(AccessError::CallerNotPendingOwner(caller)),
			Some(pending) => {
				let previous_owner = std::mem::replace(&mut self.owner, pending);
				self.pending_owner = None;
				tracing::info!(previous = %previous_owner, owner = %pending, "Ownership transferred");
				Ok(ZoneEvent::OwnershipTransferred {
					previous_owner,
					new_owner: pending,
				})
			},
		}
	}
}
