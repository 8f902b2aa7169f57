//! secp256k1 public-key recovery backed by `k256`.
//!
//! Mirrors the EVM `ecrecover` precompile: `v` must be 27 or 28, `r` and `s`
//! must lie in `[1, n)`, and high-`s` values are accepted.

use crate::RecoveryInterface;
use alloy_primitives::{keccak256, Address, B256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Recovery backend using the `k256` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl Secp256k1Recovery {
	pub fn new() -> Self {
		Self
	}
}

impl RecoveryInterface for Secp256k1Recovery {
	fn ecrecover(&self, digest: &B256, v: u8, r: &B256, s: &B256) -> Option<Address> {
		let y_odd = match v {
			27 => false,
			28 => true,
			_ => {
				tracing::trace!(v, "Rejected recovery id");
				return None;
			},
		};

		let mut sig_bytes = [0u8; 64];
		sig_bytes[..32].copy_from_slice(r.as_slice());
		sig_bytes[32..].copy_from_slice(s.as_slice());
		let signature = match Signature::from_slice(&sig_bytes) {
			Ok(signature) => signature,
			Err(e) => {
				tracing::trace!(error = %e, "Signature scalars out of range");
				return None;
			},
		};

		// k256 only verifies low-s; (r, n - s) with flipped parity recovers the same key
		let (signature, y_odd) = match signature.normalize_s() {
			Some(normalized) => (normalized, !y_odd),
			None => (signature, y_odd),
		};

		let recovery_id = RecoveryId::new(y_odd, false);
		match VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id) {
			Ok(key) => Some(address_from_key(&key)),
			Err(e) => {
				tracing::trace!(error = %e, "Public key recovery failed");
				None
			},
		}
	}
}

/// Derives the Ethereum address of a public key (last 20 bytes of the
/// keccak256 of the uncompressed point, without the 0x04 tag).
pub fn address_from_key(key: &VerifyingKey) -> Address {
	let point = key.to_encoded_point(false);
	let hash = keccak256(&point.as_bytes()[1..]);
	Address::from_slice(&hash[12..])
}
