//! Event types emitted by state-changing zone operations.
//!
//! Events are append-only log entries. Mutating operations return the event
//! they produced and the zone appends it to its [`EventLog`].

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Main event type encompassing all zone events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneEvent {
	/// An address was added to the approved signer set.
	SignerAdded { signer: Address },
	/// An address was removed from the approved signer set.
	SignerRemoved { signer: Address },
	/// The owner proposed a new owner who must accept.
	OwnershipTransferStarted {
		previous_owner: Address,
		pending_owner: Address,
	},
	/// The owner withdrew a pending proposal.
	OwnershipTransferCanceled { pending_owner: Address },
	/// The pending owner accepted and is now the owner.
	OwnershipTransferred {
		previous_owner: Address,
		new_owner: Address,
	},
}

impl ZoneEvent {
	/// Short event name, as used in logs.
	pub fn name(&self) -> &'static str {
		match self {
			ZoneEvent::SignerAdded { .. } => "SignerAdded",
			ZoneEvent::SignerRemoved { .. } => "SignerRemoved",
			ZoneEvent::OwnershipTransferStarted { .. } => "OwnershipTransferStarted",
			ZoneEvent::OwnershipTransferCanceled { .. } => "OwnershipTransferCanceled",
			ZoneEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
		}
	}
}

/// Append-only log of emitted events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
	entries: Vec<ZoneEvent>,
}

impl EventLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an event to the log.
	pub fn emit(&mut self, event: ZoneEvent) {
		tracing::debug!(event = event.name(), "Emitted zone event");
		self.entries.push(event);
	}

	/// Returns all events in emission order.
	pub fn entries(&self) -> &[ZoneEvent] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
