//! Deterministic test signers.

use alloy_primitives::{Address, B256, U256};
use k256::ecdsa::SigningKey;
use zone_signature::implementations::secp256k1::address_from_key;
use zone_signature::to_compact;
use zone_types::AuthorizationPayload;

/// Signing key wrapper producing zone-style signatures.
pub(crate) struct TestSigner {
	key: SigningKey,
}

impl TestSigner {
	/// Builds a signer from a repeated seed byte. `seed` must be non-zero.
	pub(crate) fn from_seed(seed: u8) -> Self {
		Self {
			key: SigningKey::from_slice(&[seed; 32]).unwrap(),
		}
	}

	pub(crate) fn address(&self) -> Address {
		address_from_key(self.key.verifying_key())
	}

	/// 65-byte `r || s || v` signature with `v` in {27, 28}.
	pub(crate) fn sign(&self, digest: &B256) -> [u8; 65] {
		let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest.as_slice()).unwrap();
		let mut out = [0u8; 65];
		out[..64].copy_from_slice(&signature.to_bytes());
		out[64] = 27 + recovery_id.to_byte();
		out
	}

	/// 64-byte EIP-2098 signature.
	pub(crate) fn sign_compact(&self, digest: &B256) -> [u8; 64] {
		to_compact(&self.sign(digest)).unwrap()
	}
}

/// Encodes an authorization payload around `signature`.
pub(crate) fn payload(executor: Address, expiration: u64, signature: &[u8]) -> Vec<u8> {
	AuthorizationPayload::encode(executor, U256::from(expiration), signature)
}
