//! Configuration module for the signed zone.
//!
//! This module provides structures and utilities for managing zone
//! configuration. It supports loading configuration from TOML files and
//! validates that every address is well-formed before the zone is built.
//!
//! ## Modular Configuration Support
//!
//! Configurations can be split into multiple files for better organization:
//! - Use `include = ["file1.toml", "file2.toml"]` to include other config files
//! - Each top-level section must be unique across all files (no duplicates allowed)

#[cfg(any(test, feature = "testing"))]
pub mod builders {
	pub mod config;
}
mod loader;

use alloy_primitives::Address;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use zone_types::utils::parse_address;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the signed zone.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Deployment parameters that feed the EIP-712 domain.
	pub zone: ZoneConfig,
	/// Initial ownership of the signer set.
	pub access: AccessConfig,
	/// Signers approved at startup.
	#[serde(default)]
	pub signers: SignersConfig,
}

/// Deployment parameters of the zone.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
	/// Chain id captured at construction.
	pub chain_id: u64,
	/// Address of the zone (the EIP-712 verifying contract).
	pub address: String,
}

/// Ownership configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessConfig {
	/// Address allowed to edit the signer set.
	pub owner: String,
}

/// Initial signer set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SignersConfig {
	/// Addresses added to the registry when the zone is built.
	#[serde(default)]
	pub approved: Vec<String>,
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024;
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = String::with_capacity(input.len());
	let mut last = 0;

	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let value = match std::env::var(var_name.as_str()) {
			Ok(v) => v,
			Err(_) => match cap.get(2) {
				Some(default) => default.as_str().to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name.as_str()
					)));
				},
			},
		};

		result.push_str(&input[last..full_match.start()]);
		result.push_str(&value);
		last = full_match.end();
	}
	result.push_str(&input[last..]);

	Ok(result)
}

impl Config {
	/// Loads configuration from a file with async environment variable resolution.
	///
	/// This method supports modular configuration through include directives:
	/// - `include = ["file1.toml", "file2.toml"]` - Include specific files
	///
	/// Each top-level section must be unique across all configuration files.
	pub async fn from_file(path: &str) -> Result<Self, ConfigError> {
		let path_buf = Path::new(path);
		let base_dir = path_buf.parent().unwrap_or_else(|| Path::new("."));

		let mut loader = loader::ConfigLoader::new(base_dir);
		let file_name = path_buf
			.file_name()
			.ok_or_else(|| ConfigError::Validation(format!("Invalid path: {}", path)))?;
		loader.load_config(file_name).await
	}

	/// Parsed zone address.
	pub fn zone_address(&self) -> Result<Address, ConfigError> {
		parse_address(&self.zone.address)
			.map_err(|e| ConfigError::Validation(format!("zone.address: {}", e)))
	}

	/// Parsed owner address.
	pub fn owner_address(&self) -> Result<Address, ConfigError> {
		parse_address(&self.access.owner)
			.map_err(|e| ConfigError::Validation(format!("access.owner: {}", e)))
	}

	/// Parsed initial signer addresses, in configuration order.
	pub fn signer_addresses(&self) -> Result<Vec<Address>, ConfigError> {
		self.signers
			.approved
			.iter()
			.map(|signer| {
				parse_address(signer)
					.map_err(|e| ConfigError::Validation(format!("signers.approved: {}", e)))
			})
			.collect()
	}

	/// Validates the configuration to ensure all required fields are properly set.
	///
	/// - Chain id must be non-zero
	/// - Zone and owner addresses must parse and be non-zero
	/// - Signer addresses must parse, be non-zero and be unique
	fn validate(&self) -> Result<(), ConfigError> {
		if self.zone.chain_id == 0 {
			return Err(ConfigError::Validation(
				"zone.chain_id must be greater than 0".into(),
			));
		}

		if self.zone_address()? == Address::ZERO {
			return Err(ConfigError::Validation(
				"zone.address cannot be the zero address".into(),
			));
		}

		if self.owner_address()? == Address::ZERO {
			return Err(ConfigError::Validation(
				"access.owner cannot be the zero address".into(),
			));
		}

		let mut seen = HashSet::new();
		for signer in self.signer_addresses()? {
			if signer == Address::ZERO {
				return Err(ConfigError::Validation(
					"signers.approved cannot contain the zero address".into(),
				));
			}
			if !seen.insert(signer) {
				return Err(ConfigError::Validation(format!(
					"Duplicate signer {} in signers.approved",
					signer
				)));
			}
		}

		Ok(())
	}
}

/// Implementation of FromStr trait for Config to enable parsing from string.
///
/// Environment variables are resolved and the configuration is automatically
/// validated after parsing.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: &str = r#"
[zone]
chain_id = 1
address = "0x000000e7ec00e7b300774b00001314b8610022b8"

[access]
owner = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
"#;

	#[test]
	fn test_env_var_resolution() {
		std::env::set_var("ZONE_TEST_HOST", "localhost");
		std::env::set_var("ZONE_TEST_PORT", "5432");

		let input = "host = \"${ZONE_TEST_HOST}:${ZONE_TEST_PORT}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "host = \"localhost:5432\"");

		std::env::remove_var("ZONE_TEST_HOST");
		std::env::remove_var("ZONE_TEST_PORT");
	}

	#[test]
	fn test_env_var_with_default() {
		let input = "value = \"${ZONE_MISSING_VAR:-default_value}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "value = \"default_value\"");
	}

	#[test]
	fn test_missing_env_var_error() {
		let input = "value = \"${ZONE_MISSING_VAR}\"";
		let result = resolve_env_vars(input);
		assert!(result.is_err());
		assert!(result.unwrap_err().to_string().contains("ZONE_MISSING_VAR"));
	}

	#[test]
	fn test_minimal_config() {
		let config: Config = BASE.parse().unwrap();
		assert_eq!(config.zone.chain_id, 1);
		assert!(config.signers.approved.is_empty());
		assert_eq!(
			config.owner_address().unwrap(),
			"0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
				.parse::<Address>()
				.unwrap()
		);
	}

	#[test]
	fn test_config_with_env_vars() {
		std::env::set_var("ZONE_TEST_CHAIN_ID", "10");

		let config_str = r#"
[zone]
chain_id = ${ZONE_TEST_CHAIN_ID}
address = "0x000000e7ec00e7b300774b00001314b8610022b8"

[access]
owner = "${ZONE_TEST_OWNER:-0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266}"

[signers]
approved = ["0x70997970c51812dc3a010c7d01b50e0d17dc79c8"]
"#;

		let config: Config = config_str.parse().unwrap();
		assert_eq!(config.zone.chain_id, 10);
		assert_eq!(config.signer_addresses().unwrap().len(), 1);

		std::env::remove_var("ZONE_TEST_CHAIN_ID");
	}

	#[test]
	fn test_zero_chain_id_rejected() {
		let config_str = BASE.replace("chain_id = 1", "chain_id = 0");
		let err = config_str.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("chain_id"));
	}

	#[test]
	fn test_zero_owner_rejected() {
		let config_str = BASE.replace(
			"0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
			"0x0000000000000000000000000000000000000000",
		);
		let err = config_str.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("access.owner"));
	}

	#[test]
	fn test_malformed_zone_address_rejected() {
		let config_str = BASE.replace("0x000000e7ec00e7b300774b00001314b8610022b8", "0x1234");
		let err = config_str.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("zone.address"));
	}

	#[test]
	fn test_signer_validation() {
		let duplicate = format!(
			"{}\n[signers]\napproved = [\"{}\", \"{}\"]\n",
			BASE,
			"0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
			"0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
		);
		let err = duplicate.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("Duplicate signer"));

		let zero = format!(
			"{}\n[signers]\napproved = [\"0x0000000000000000000000000000000000000000\"]\n",
			BASE
		);
		assert!(zero.parse::<Config>().is_err());
	}
}
