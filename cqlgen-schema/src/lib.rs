//! # cqlgen Schema
//!
//! CQL catalog schema model and column type grammar.
//!
//! This crate provides:
//! - Type definitions for catalog columns and tables
//! - A recursive-descent parser for CQL column type tokens
//! - Identifier transforms and table-to-record assembly

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use ir::{FieldDefinition, RecordDefinition, field_ident, record_ident};
pub use parser::parse_cql_type;
pub use types::{ColumnDefinition, CqlType, ScalarType, TableSchema};
