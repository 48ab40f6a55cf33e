//! # cqlgen Catalog
//!
//! Schema catalog access for cqlgen.
//!
//! This crate provides:
//! - The `Catalog` trait the generation pipeline depends on
//! - A ScyllaDB/Cassandra implementation over `system_schema`
//! - A builder for session configuration

pub mod builder;
pub mod error;
pub mod session;

pub use builder::CatalogBuilder;
pub use error::CatalogError;
pub use session::{Catalog, ScyllaCatalog};
