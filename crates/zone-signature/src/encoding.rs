//! Signature encodings accepted by the zone.
//!
//! Two layouts are recognised by length:
//! - 65 bytes: `r (32) || s (32) || v (1)`
//! - 64 bytes: `r (32) || vs (32)` (EIP-2098), where the top bit of `vs` is
//!   the y-parity and the remaining 255 bits are `s`.

use alloy_primitives::B256;

/// Length of a standard `(r, s, v)` signature.
pub const STANDARD_SIGNATURE_LEN: usize = 65;
/// Length of a compact `(r, vs)` signature.
pub const COMPACT_SIGNATURE_LEN: usize = 64;

const PARITY_MASK: u8 = 0x80;

/// The `(v, r, s)` components handed to the recovery primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParts {
	pub v: u8,
	pub r: B256,
	pub s: B256,
}

impl SignatureParts {
	/// Splits a signature blob into components.
	///
	/// Returns `None` for any length other than 64 or 65.
	pub fn split(signature: &[u8]) -> Option<Self> {
		match signature.len() {
			STANDARD_SIGNATURE_LEN => Some(Self {
				r: B256::from_slice(&signature[..32]),
				s: B256::from_slice(&signature[32..64]),
				v: signature[64],
			}),
			COMPACT_SIGNATURE_LEN => {
				let mut s = [0u8; 32];
				s.copy_from_slice(&signature[32..64]);
				let parity = s[0] >> 7;
				s[0] &= !PARITY_MASK;
				Some(Self {
					r: B256::from_slice(&signature[..32]),
					s: B256::from(s),
					v: 27 + parity,
				})
			},
			_ => None,
		}
	}

	/// Encodes the components in the 65-byte layout.
	pub fn to_standard(&self) -> [u8; STANDARD_SIGNATURE_LEN] {
		let mut out = [0u8; STANDARD_SIGNATURE_LEN];
		out[..32].copy_from_slice(self.r.as_slice());
		out[32..64].copy_from_slice(self.s.as_slice());
		out[64] = self.v;
		out
	}
}

/// Converts a 65-byte signature into its 64-byte compact form.
///
/// Returns `None` when the input is not 65 bytes, `v` is not 27 or 28, or the
/// top bit of `s` is already set (such an `s` has no compact encoding).
pub fn to_compact(signature: &[u8]) -> Option<[u8; COMPACT_SIGNATURE_LEN]> {
	if signature.len() != STANDARD_SIGNATURE_LEN {
		return None;
	}
	let parity = match signature[64] {
		27 => 0u8,
		28 => 1u8,
		_ => return None,
	};
	if signature[32] & PARITY_MASK != 0 {
		return None;
	}

	let mut out = [0u8; COMPACT_SIGNATURE_LEN];
	out.copy_from_slice(&signature[..64]);
	out[32] |= parity << 7;
	Some(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn standard(v: u8) -> [u8; 65] {
		let mut sig = [0u8; 65];
		sig[..32].fill(0x11);
		sig[32..64].fill(0x22);
		sig[64] = v;
		sig
	}

	#[test]
	fn test_split_standard() {
		let parts = SignatureParts::split(&standard(28)).unwrap();
		assert_eq!(parts.r, B256::repeat_byte(0x11));
		assert_eq!(parts.s, B256::repeat_byte(0x22));
		assert_eq!(parts.v, 28);
	}

	#[test]
	fn test_split_compact_folds_parity() {
		let compact = to_compact(&standard(28)).unwrap();
		assert_eq!(compact[32], 0x22 | 0x80);

		let parts = SignatureParts::split(&compact).unwrap();
		assert_eq!(parts.v, 28);
		assert_eq!(parts.s, B256::repeat_byte(0x22));

		let even = SignatureParts::split(&to_compact(&standard(27)).unwrap()).unwrap();
		assert_eq!(even.v, 27);
	}

	#[test]
	fn test_split_does_not_touch_input() {
		let compact = to_compact(&standard(28)).unwrap();
		let before = compact;
		let _ = SignatureParts::split(&compact);
		assert_eq!(compact, before);
	}

	#[test]
	fn test_split_rejects_other_lengths() {
		for len in [0usize, 1, 63, 66, 130] {
			assert!(SignatureParts::split(&vec![0u8; len]).is_none());
		}
	}

	#[test]
	fn test_to_compact_rejects_unencodable() {
		assert!(to_compact(&standard(0)).is_none());
		assert!(to_compact(&[0u8; 64]).is_none());

		let mut high = standard(27);
		high[32] = 0x80;
		assert!(to_compact(&high).is_none());
	}

	#[test]
	fn test_to_standard_round_trip() {
		let sig = standard(27);
		let parts = SignatureParts::split(&sig).unwrap();
		assert_eq!(parts.to_standard(), sig);
	}
}
