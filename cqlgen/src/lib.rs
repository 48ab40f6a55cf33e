//! # cqlgen
//!
//! Generate serde-tagged Rust structs from a ScyllaDB/Cassandra keyspace.
//!
//! cqlgen introspects `system_schema` through the catalog crate, assembles
//! one record definition per table and renders a single Rust module per
//! keyspace.
//!
//! ## Crate Organization
//!
//! - [`schema`] - CQL type grammar, parsing and record assembly
//! - [`codegen`] - Rust source rendering
//! - [`catalog`] - Schema catalog access
//! - [`pipeline`] - Per-keyspace generation loop
//! - [`report`] - Per-run outcome summary
//! - [`sink`] - Output persistence

pub mod pipeline;
pub mod report;
pub mod sink;

/// CQL schema model and type grammar.
pub mod schema {
    pub use cqlgen_schema::*;
}

/// Rust code generation.
pub mod codegen {
    pub use cqlgen_codegen::*;
}

/// Schema catalog access.
pub mod catalog {
    pub use cqlgen_catalog::*;
}
