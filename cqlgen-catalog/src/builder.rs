//! Catalog connection builder.

use crate::error::CatalogError;
use crate::session::ScyllaCatalog;
use scylla::SessionBuilder;
use std::time::Duration;

/// Builder for configuring and connecting a [`ScyllaCatalog`].
pub struct CatalogBuilder {
    host: String,
    port: u16,
    connect_timeout: Duration,
}

impl CatalogBuilder {
    /// Creates a new builder for the given catalog host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 9042,
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the native protocol port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Connects to the catalog.
    ///
    /// # Errors
    /// Returns `CatalogError::Connect` if session establishment fails.
    pub async fn connect(self) -> Result<ScyllaCatalog, CatalogError> {
        let node = format!("{}:{}", self.host, self.port);
        tracing::info!("Connecting to catalog at {}", node);

        let session = SessionBuilder::new()
            .known_node(node)
            .connection_timeout(self.connect_timeout)
            .build()
            .await?;

        Ok(ScyllaCatalog::new(session))
    }
}
