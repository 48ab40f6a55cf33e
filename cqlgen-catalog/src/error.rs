//! Error types for catalog access.

use scylla::transport::errors::{NewSessionError, QueryError};
use thiserror::Error;

/// Error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Session establishment failure.
    #[error("failed to connect to catalog: {0}")]
    Connect(#[from] NewSessionError),

    /// Query execution failure.
    #[error("catalog query failed: {0}")]
    Query(#[from] QueryError),

    /// The catalog returned rows in an unexpected shape.
    #[error("unexpected catalog response: {message}")]
    Response {
        /// Error message.
        message: String,
    },
}

impl CatalogError {
    /// Creates a response error with the given message.
    pub fn response(message: impl Into<String>) -> Self {
        Self::Response {
            message: message.into(),
        }
    }
}
