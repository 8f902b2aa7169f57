//! Access control module for the signed zone.
//!
//! This module defines the ownership interface that gates edits to the signer
//! set. Ownership moves in two steps: the current owner proposes a new owner,
//! and the proposal only takes effect once that address accepts it.

use alloy_primitives::Address;
use thiserror::Error;
use zone_types::ZoneEvent;

/// Re-export implementations
pub mod implementations {
	pub mod two_step;
}

pub use implementations::two_step::TwoStepOwnable;

/// Errors that can occur during access control operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	/// The caller is not the current owner.
	#[error("Caller {0} is not the owner")]
	CallerNotOwner(Address),
	/// The caller is not the pending owner.
	#[error("Caller {0} is not the pending owner")]
	CallerNotPendingOwner(Address),
	/// Ownership cannot be handed to the zero address.
	#[error("New owner cannot be the zero address")]
	NewOwnerIsZeroAddress,
	/// The proposed owner already owns the zone.
	#[error("Address {0} is already the owner")]
	NewOwnerIsOwner(Address),
	/// There is no pending transfer to accept or cancel.
	#[error("No ownership transfer is pending")]
	NoPendingTransfer,
}

/// Trait defining the interface for ownership implementations.
///
/// Every state-changing method returns the event it produced so the caller
/// can append it to the zone's event log.
pub trait AccessControl: Send + Sync {
	/// Returns the current owner.
	fn owner(&self) -> Address;

	/// Returns the address a transfer has been proposed to, if any.
	fn pending_owner(&self) -> Option<Address>;

	/// Proposes `new_owner` as the next owner. Owner only.
	///
	/// Replaces any earlier pending proposal.
	fn transfer_ownership(
		&mut self,
		caller: Address,
		new_owner: Address,
	) -> Result<ZoneEvent, AccessError>;

	/// Withdraws the pending proposal. Owner only.
	fn cancel_ownership_transfer(&mut self, caller: Address) -> Result<ZoneEvent, AccessError>;

	/// Completes a pending transfer. Pending owner only.
	fn accept_ownership(&mut self, caller: Address) -> Result<ZoneEvent, AccessError>;

	/// Fails unless `caller` is the current owner.
	fn require_owner(&self, caller: Address) -> Result<(), AccessError> {
		if caller == self.owner() {
			Ok(())
		} else {
			Err(AccessError::CallerNotOwner(caller))
		}
	}
}
