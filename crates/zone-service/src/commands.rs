//! Command handlers for the signed-zone CLI.
//!
//! Each handler reads from a built [`SignedZone`] and returns a serializable
//! report; `main` prints it as JSON. Argument strings are parsed here so the
//! handlers can be exercised without going through clap.

use alloy_primitives::{Address, FixedBytes, B256};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use zone_config::Config;
use zone_core::{SignedZone, ZoneBuilder};
use zone_types::utils::{
	current_timestamp, decode_hex, parse_address, parse_b256, parse_u256, NAME_SIGNED_ZONE,
	VERSION_SIGNED_ZONE,
};
use zone_types::{FixedEnvironment, OrderContext, SignedOrder};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
	#[error("Invalid --{name}: {reason}")]
	InvalidArgument { name: &'static str, reason: String },
	#[error("Configuration error: {0}")]
	Config(String),
}

fn argument<T>(name: &'static str, parsed: Result<T, String>) -> Result<T, CommandError> {
	parsed.map_err(|reason| CommandError::InvalidArgument { name, reason })
}

/// Output of the `domain` command.
#[derive(Debug, Serialize)]
pub struct DomainReport {
	pub name: &'static str,
	pub version: &'static str,
	pub chain_id: u64,
	pub verifying_contract: Address,
	pub separator: B256,
}

/// Output of the `digest` command.
#[derive(Debug, Serialize)]
pub struct DigestReport {
	pub chain_id: u64,
	pub domain_separator: B256,
	pub struct_hash: B256,
	pub digest: B256,
}

/// Output of the `validate` command.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
	pub order_hash: B256,
	pub executor: Address,
	pub accepted: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub magic: Option<FixedBytes<4>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Output of the `signers` command.
#[derive(Debug, Serialize)]
pub struct SignersReport {
	pub owner: Address,
	pub pending_owner: Option<Address>,
	pub approved: Vec<Address>,
}

/// Loads the configuration at `path` and builds a zone.
///
/// The zone sees `chain_id` and `now` as its live environment, falling back
/// to the configured chain id and the current time.
pub async fn load_zone(
	path: &Path,
	chain_id: Option<u64>,
	now: Option<u64>,
) -> Result<SignedZone, CommandError> {
	let path = path
		.to_str()
		.ok_or_else(|| CommandError::Config(format!("Invalid path: {}", path.display())))?;
	let config = Config::from_file(path)
		.await
		.map_err(|e| CommandError::Config(e.to_string()))?;
	tracing::info!("Loaded configuration [{}]", config.zone.address);

	let environment = FixedEnvironment::new(
		chain_id.unwrap_or(config.zone.chain_id),
		now.unwrap_or_else(current_timestamp),
	);
	ZoneBuilder::new(config)
		.with_environment(Arc::new(environment))
		.build()
		.map_err(|e| CommandError::Config(e.to_string()))
}

pub fn domain(zone: &SignedZone) -> DomainReport {
	let info = zone.domain_info();
	DomainReport {
		name: NAME_SIGNED_ZONE,
		version: VERSION_SIGNED_ZONE,
		chain_id: info.chain_id,
		verifying_contract: info.verifying_contract,
		separator: info.separator,
	}
}

/// Computes the digest an authority signs to approve an order.
pub fn digest(
	zone: &SignedZone,
	executor: &str,
	expiration: &str,
	order_hash: &str,
) -> Result<DigestReport, CommandError> {
	let message = SignedOrder {
		fulfiller: argument("executor", parse_address(executor))?,
		expiration: argument("expiration", parse_u256(expiration))?,
		order_hash: argument("order-hash", parse_b256(order_hash))?,
	};
	let info = zone.domain_info();

	Ok(DigestReport {
		chain_id: info.chain_id,
		domain_separator: info.separator,
		struct_hash: message.struct_hash(),
		digest: zone.signed_order_digest(&message),
	})
}

/// Runs the zone's validation for one order.
///
/// A rejection is reported in the returned value, not as an error.
pub fn validate(
	zone: &SignedZone,
	order_hash: &str,
	executor: &str,
	extra_data: &str,
) -> Result<ValidationReport, CommandError> {
	let order_hash = argument("order-hash", parse_b256(order_hash))?;
	let executor = argument("executor", parse_address(executor))?;
	let extra_data = argument("extra-data", decode_hex(extra_data))?;

	let report = match zone.validate(&OrderContext::new(order_hash, executor), &extra_data) {
		Ok(magic) => ValidationReport {
			order_hash,
			executor,
			accepted: true,
			magic: Some(magic),
			reason: None,
			error: None,
		},
		Err(e) => ValidationReport {
			order_hash,
			executor,
			accepted: false,
			magic: None,
			reason: Some(e.kind()),
			error: Some(e.to_string()),
		},
	};
	Ok(report)
}

pub fn signers(zone: &SignedZone) -> SignersReport {
	SignersReport {
		owner: zone.owner(),
		pending_owner: zone.pending_owner(),
		approved: zone.approved_signers(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{hex, U256};
	use k256::ecdsa::SigningKey;
	use std::fs;
	use tempfile::TempDir;
	use zone_config::builders::config::ConfigBuilder;
	use zone_core::VALID_ORDER_MAGIC;
	use zone_signature::implementations::secp256k1::address_from_key;
	use zone_types::AuthorizationPayload;

	const ZONE: &str = "0x000000e7ec00e7b300774b00001314b8610022b8";
	const ORDER_HASH: &str = "0x4242424242424242424242424242424242424242424242424242424242424242";
	const EXECUTOR: &str = "0x1111111111111111111111111111111111111111";

	fn signing_key() -> SigningKey {
		SigningKey::from_slice(&[0x5a; 32]).unwrap()
	}

	fn zone_with(signer: Option<Address>, timestamp: u64) -> SignedZone {
		let mut builder = ConfigBuilder::new().zone_address(ZONE.parse().unwrap());
		if let Some(signer) = signer {
			builder = builder.signer(signer);
		}
		ZoneBuilder::new(builder.build())
			.with_environment(Arc::new(FixedEnvironment::new(1, timestamp)))
			.build()
			.unwrap()
	}

	fn signed_extra_data(zone: &SignedZone, key: &SigningKey, expiration: u64) -> String {
		let report = digest(zone, EXECUTOR, &expiration.to_string(), ORDER_HASH).unwrap();
		let (signature, recovery_id) = key
			.sign_prehash_recoverable(report.digest.as_slice())
			.unwrap();
		let mut raw = signature.to_bytes().to_vec();
		raw.push(27 + recovery_id.to_byte());

		let blob = AuthorizationPayload::encode(
			EXECUTOR.parse().unwrap(),
			U256::from(expiration),
			&raw,
		);
		hex::encode_prefixed(blob)
	}

	#[test]
	fn test_domain_report() {
		let report = domain(&zone_with(None, 0));
		let json = serde_json::to_value(&report).unwrap();

		assert_eq!(json["name"], "SignedZone");
		assert_eq!(json["version"], "1.0");
		assert_eq!(json["chain_id"], 1);
		assert_eq!(
			json["separator"],
			"0x8a4caeb07e3fbf86a40b13b1e8afee122b9f931bf0ebefe82c979b5cc012a7b0"
		);
	}

	#[test]
	fn test_digest_report() {
		let zone = zone_with(None, 0);
		let report = digest(&zone, EXECUTOR, "1700003600", ORDER_HASH).unwrap();

		assert_eq!(
			format!("{:x}", report.struct_hash),
			"f326b14e9d83e021a4d95465cabb8cbd7a06d662b8948dbe5a0c69d952b792a9"
		);
		assert_eq!(
			format!("{:x}", report.digest),
			"dcfee2721ce3c67e2289b3758d9e934550098f8de1d14e79877d160b5da0c0fd"
		);

		// Hex expirations are accepted too.
		let hex_report = digest(&zone, EXECUTOR, "0x6553ff10", ORDER_HASH).unwrap();
		assert_eq!(hex_report.digest, report.digest);
	}

	#[test]
	fn test_digest_rejects_bad_arguments() {
		let zone = zone_with(None, 0);
		let err = digest(&zone, "0x1234", "1", ORDER_HASH).unwrap_err();
		assert!(err.to_string().contains("--executor"));

		let err = digest(&zone, EXECUTOR, "soon", ORDER_HASH).unwrap_err();
		assert!(err.to_string().contains("--expiration"));
	}

	#[test]
	fn test_validate_accepts_and_rejects() {
		let key = signing_key();
		let signer = address_from_key(key.verifying_key());
		let zone = zone_with(Some(signer), 1_000);
		let extra_data = signed_extra_data(&zone, &key, 2_000);

		let accepted = validate(&zone, ORDER_HASH, EXECUTOR, &extra_data).unwrap();
		assert!(accepted.accepted);
		assert_eq!(accepted.magic, Some(VALID_ORDER_MAGIC));
		let json = serde_json::to_value(&accepted).unwrap();
		assert_eq!(json["magic"], "0x33131570");
		assert!(json.get("reason").is_none());

		let other = "0x9999999999999999999999999999999999999999";
		let rejected = validate(&zone, ORDER_HASH, other, &extra_data).unwrap();
		assert!(!rejected.accepted);
		assert_eq!(rejected.reason, Some("WrongExecutor"));
	}

	#[test]
	fn test_validate_unknown_signer() {
		let key = signing_key();
		let zone = zone_with(None, 1_000);
		let extra_data = signed_extra_data(&zone, &key, 2_000);

		let report = validate(&zone, ORDER_HASH, EXECUTOR, &extra_data).unwrap();
		assert_eq!(report.reason, Some("SignerNotApproved"));
	}

	#[test]
	fn test_validate_malformed_input() {
		let zone = zone_with(None, 0);

		let report = validate(&zone, ORDER_HASH, EXECUTOR, "0x00").unwrap();
		assert_eq!(report.reason, Some("MalformedExtraData"));

		assert!(matches!(
			validate(&zone, ORDER_HASH, EXECUTOR, "0xzz"),
			Err(CommandError::InvalidArgument {
				name: "extra-data",
				..
			})
		));
	}

	#[test]
	fn test_signers_report() {
		let signer = Address::repeat_byte(0x01);
		let report = signers(&zone_with(Some(signer), 0));

		assert_eq!(report.owner, Address::repeat_byte(0xaa));
		assert_eq!(report.pending_owner, None);
		assert_eq!(report.approved, vec![signer]);
	}

	#[tokio::test]
	async fn test_load_zone_from_file() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("zone.toml");
		fs::write(
			&path,
			format!(
				r#"
[zone]
chain_id = 1
address = "{}"

[access]
owner = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"

[signers]
approved = ["0x70997970c51812dc3a010c7d01b50e0d17dc79c8"]
"#,
				ZONE
			),
		)
		.unwrap();

		let zone = load_zone(&path, None, Some(0)).await.unwrap();
		assert_eq!(zone.approved_signers().len(), 1);
		assert_eq!(zone.domain_info().chain_id, 1);
		assert_eq!(format!("{:#x}", zone.address()), ZONE);
	}

	#[tokio::test]
	async fn test_load_zone_missing_file() {
		let temp_dir = TempDir::new().unwrap();
		let result = load_zone(&temp_dir.path().join("missing.toml"), None, None).await;
		assert!(matches!(result, Err(CommandError::Config(_))));
	}
}
