//! Main entry point for the signed-zone command-line tool.
//!
//! Loads a zone from configuration and answers questions about it: the
//! domain separator, the digest an authority must sign for an order, whether
//! a given authorization payload validates, and the current signer set.
//! Results are printed to stdout as JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

mod commands;

/// Command-line arguments for the signed zone.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml", env = "SIGNED_ZONE_CONFIG")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the EIP-712 domain separator
	Domain {
		/// Live chain id (defaults to the configured one)
		#[arg(long)]
		chain_id: Option<u64>,
	},
	/// Print the digest an authority signs to approve an order
	Digest {
		/// Expected executor; the zero address allows anyone
		#[arg(long)]
		executor: String,
		/// Expiration timestamp, decimal or 0x-prefixed hex
		#[arg(long)]
		expiration: String,
		/// Order hash
		#[arg(long)]
		order_hash: String,
		/// Live chain id (defaults to the configured one)
		#[arg(long)]
		chain_id: Option<u64>,
	},
	/// Validate an authorization payload; exits non-zero on rejection
	Validate {
		/// Order hash
		#[arg(long)]
		order_hash: String,
		/// Address executing the order
		#[arg(long)]
		executor: String,
		/// Hex-encoded extraData
		#[arg(long)]
		extra_data: String,
		/// Timestamp to validate at (defaults to now)
		#[arg(long)]
		now: Option<u64>,
		/// Live chain id (defaults to the configured one)
		#[arg(long)]
		chain_id: Option<u64>,
	},
	/// List the owner and approved signers
	Signers,
}

impl Command {
	fn chain_id(&self) -> Option<u64> {
		match self {
			Command::Domain { chain_id }
			| Command::Digest { chain_id, .. }
			| Command::Validate { chain_id, .. } => *chain_id,
			Command::Signers => None,
		}
	}

	fn now(&self) -> Option<u64> {
		match self {
			Command::Validate { now, .. } => *now,
			_ => None,
		}
	}
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Main entry point for the signed zone.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration and builds the zone
/// 4. Runs the requested command and prints its report
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.with_writer(std::io::stderr)
		.init();

	let zone =
		commands::load_zone(&args.config, args.command.chain_id(), args.command.now()).await?;
	tracing::info!(address = %zone.address(), "Started signed zone");

	match args.command {
		Command::Domain { .. } => print_json(&commands::domain(&zone))?,
		Command::Digest {
			executor,
			expiration,
			order_hash,
			..
		} => print_json(&commands::digest(
			&zone,
			&executor,
			&expiration,
			&order_hash,
		)?)?,
		Command::Validate {
			order_hash,
			executor,
			extra_data,
			..
		} => {
			let report = commands::validate(&zone, &order_hash, &executor, &extra_data)?;
			print_json(&report)?;
			if !report.accepted {
				std::process::exit(1);
			}
		},
		Command::Signers => print_json(&commands::signers(&zone))?,
	}

	Ok(())
}
