//! Signature recovery module for the signed zone.
//!
//! Recovers the address that signed a 32-byte digest from either a 65-byte
//! `(r, s, v)` signature or a 64-byte EIP-2098 compact signature. Recovery
//! never fails loudly: malformed or invalid signatures recover to the zero
//! address, which is never an approved signer.

use alloy_primitives::{Address, B256};

pub mod encoding;

/// Re-export implementations
pub mod implementations {
	pub mod secp256k1;
}

pub use encoding::{to_compact, SignatureParts, COMPACT_SIGNATURE_LEN, STANDARD_SIGNATURE_LEN};
pub use implementations::secp256k1::Secp256k1Recovery;

/// Trait defining the elliptic-curve recovery primitive.
///
/// Implementations follow `ecrecover` semantics: any invalid input yields
/// `None` rather than an error.
pub trait RecoveryInterface: Send + Sync {
	/// Recovers the signing address from a prehashed digest and `(v, r, s)`.
	fn ecrecover(&self, digest: &B256, v: u8, r: &B256, s: &B256) -> Option<Address>;
}

/// Service that recovers signers from raw signature blobs.
///
/// Wraps a [`RecoveryInterface`] implementation and handles the
/// length-dependent decoding of the signature.
pub struct RecoveryService {
	/// The underlying recovery implementation.
	implementation: Box<dyn RecoveryInterface>,
}

impl Default for RecoveryService {
	fn default() -> Self {
		Self::new(Box::new(Secp256k1Recovery::new()))
	}
}

impl RecoveryService {
	/// Creates a new RecoveryService with the specified implementation.
	pub fn new(implementation: Box<dyn RecoveryInterface>) -> Self {
		Self { implementation }
	}

	/// Recovers the signer of `digest`.
	///
	/// Returns `Address::ZERO` for lengths other than 64 or 65 and for any
	/// signature the primitive cannot recover.
	pub fn recover(&self, digest: &B256, signature: &[u8]) -> Address {
		let Some(parts) = SignatureParts::split(signature) else {
			tracing::trace!(len = signature.len(), "Unsupported signature length");
			return Address::ZERO;
		};

		self.implementation
			.ecrecover(digest, parts.v, &parts.r, &parts.s)
			.unwrap_or(Address::ZERO)
	}
}
