//! Common types module for the signed zone.
//!
//! This module defines the core data types shared by the zone crates: the
//! order context and signed message, the authorization payload decoder,
//! zone events and the chain environment abstraction.

/// Chain environment (live chain id and timestamp).
pub mod environment;
/// Event types emitted by state-changing operations.
pub mod events;
/// Order context and the EIP-712 signed message.
pub mod order;
/// Decoder for the authorization payload in `extraData`.
pub mod payload;
/// Utility functions for hashing, parsing and formatting.
pub mod utils;

pub use alloy_primitives::{Address, B256, U256};
pub use environment::{ChainEnvironment, FixedEnvironment, SystemEnvironment};
pub use events::{EventLog, ZoneEvent};
pub use order::{OrderContext, SignedOrder};
pub use payload::{AuthorizationPayload, PayloadError};
pub use utils::{truncate_hash, with_0x_prefix, without_0x_prefix};
