//! # cqlgen Codegen
//!
//! Rust source generation from CQL catalog schemas.
//!
//! This crate provides:
//! - Record struct rendering with serde round-trip tags
//! - Recursive Rust type rendering for CQL descriptors
//! - Per-keyspace compilation unit assembly

pub mod generator;
pub mod rust;

pub use generator::Generator;
pub use rust::{RecordGenerator, rust_type};

use cqlgen_schema::RecordDefinition;

/// Generates a keyspace compilation unit from assembled records.
///
/// # Arguments
/// * `keyspace` - Keyspace name used in the unit header
/// * `records` - Record definitions in canonical order
///
/// # Returns
/// Generated Rust source as a string.
#[must_use]
pub fn generate_unit(keyspace: &str, records: &[RecordDefinition]) -> String {
    Generator::new(keyspace, records).generate()
}
