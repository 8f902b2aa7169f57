//! Core of the signed zone.
//!
//! This crate ties the zone components together: the cached EIP-712 domain
//! separator, the order validation engine that checks authorization payloads
//! against the signer registry, the [`SignedZone`] facade that owns all zone
//! state, and a builder that assembles a zone from configuration.

pub mod builder;
pub mod domain;
pub mod engine;
pub mod zone;

#[cfg(test)]
mod utils;

pub use builder::{BuilderError, ZoneBuilder};
pub use domain::DomainSeparatorCache;
pub use engine::{OrderValidationEngine, ValidationError, VALID_ORDER_MAGIC};
pub use zone::{DomainInfo, SignedZone};
