//! Order validation engine.
//!
//! Decides whether an order may execute, given the authorization payload the
//! filler attached as `extraData`. Validation is a pure read: it consults
//! the signer registry and the chain environment but never mutates either.
//!
//! Checks run in a fixed order and the first failure wins:
//! payload length, expiration, executor restriction, then signer approval.

use crate::domain::DomainSeparatorCache;
use alloy_primitives::{Address, FixedBytes, B256, U256};
use thiserror::Error;
use tracing::instrument;
use zone_registry::SignerRegistry;
use zone_signature::RecoveryService;
use zone_types::utils::compute_final_digest;
use zone_types::{
	truncate_hash, AuthorizationPayload, ChainEnvironment, OrderContext, PayloadError, SignedOrder,
};

/// Value returned for an authorized order: the selector of
/// `isValidOrderIncludingExtraData`.
pub const VALID_ORDER_MAGIC: FixedBytes<4> = FixedBytes::new([0x33, 0x13, 0x15, 0x70]);

/// Reasons an order is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// The payload cannot hold the executor and expiration fields.
	#[error("Malformed extra data: {0}")]
	MalformedExtraData(#[from] PayloadError),
	/// The approval's expiration is in the past.
	#[error("Signature for order {order_hash} expired at {expiration}")]
	Expired { expiration: U256, order_hash: B256 },
	/// The approval names a different executor.
	#[error("Order {order_hash} restricted to {expected}, executed by {actual}")]
	WrongExecutor {
		expected: Address,
		actual: Address,
		order_hash: B256,
	},
	/// The recovered signer is not approved. `signer` is the zero address
	/// when recovery failed.
	#[error("Signer {signer} is not approved for order {order_hash}")]
	SignerNotApproved { signer: Address, order_hash: B256 },
}

impl ValidationError {
	/// Short error name, as used in logs and CLI output.
	pub fn kind(&self) -> &'static str {
		match self {
			ValidationError::MalformedExtraData(_) => "MalformedExtraData",
			ValidationError::Expired { .. } => "Expired",
			ValidationError::WrongExecutor { .. } => "WrongExecutor",
			ValidationError::SignerNotApproved { .. } => "SignerNotApproved",
		}
	}
}

/// Validates authorization payloads against the zone's signing domain.
pub struct OrderValidationEngine {
	domain: DomainSeparatorCache,
	recovery: RecoveryService,
}

impl OrderValidationEngine {
	pub fn new(domain: DomainSeparatorCache, recovery: RecoveryService) -> Self {
		Self { domain, recovery }
	}

	/// The domain separator cache this engine signs against.
	pub fn domain(&self) -> &DomainSeparatorCache {
		&self.domain
	}

	/// Computes the EIP-712 digest of `message` for `live_chain_id`.
	pub fn signed_order_digest(&self, message: &SignedOrder, live_chain_id: u64) -> B256 {
		compute_final_digest(
			&self.domain.current_separator(live_chain_id),
			&message.struct_hash(),
		)
	}

	/// Returns [`VALID_ORDER_MAGIC`] if an approved signer authorized this
	/// order for this executor and the approval has not expired.
	///
	/// An expiration equal to the current timestamp is still valid.
	#[instrument(skip_all, fields(order_hash = %truncate_hash(&context.order_hash)))]
	pub fn validate(
		&self,
		context: &OrderContext,
		extra_data: &[u8],
		registry: &SignerRegistry,
		environment: &dyn ChainEnvironment,
	) -> Result<FixedBytes<4>, ValidationError> {
		let result = self.check(context, extra_data, registry, environment);
		match &result {
			Ok(_) => tracing::debug!(executor = %context.actual_executor, "Order authorized"),
			Err(e) => tracing::warn!(reason = e.kind(), error = %e, "Order rejected"),
		}
		result
	}

	fn check(
		&self,
		context: &OrderContext,
		extra_data: &[u8],
		registry: &SignerRegistry,
		environment: &dyn ChainEnvironment,
	) -> Result<FixedBytes<4>, ValidationError> {
		let payload = AuthorizationPayload::decode(extra_data)?;

		if U256::from(environment.timestamp()) > payload.expiration {
			return Err(ValidationError::Expired {
				expiration: payload.expiration,
				order_hash: context.order_hash,
			});
		}

		if !payload.is_unrestricted() && payload.expected_executor != context.actual_executor {
			return Err(ValidationError::WrongExecutor {
				expected: payload.expected_executor,
				actual: context.actual_executor,
				order_hash: context.order_hash,
			});
		}

		let digest = self.signed_order_digest(
			&payload.signed_order(context.order_hash),
			environment.chain_id(),
		);
		let signer = self.recovery.recover(&digest, payload.signature);

		// The zero address is never approved, so failed recovery lands here.
		if !registry.is_approved(signer) {
			return Err(ValidationError::SignerNotApproved {
				signer,
				order_hash: context.order_hash,
			});
		}

		Ok(VALID_ORDER_MAGIC)
	}
}
