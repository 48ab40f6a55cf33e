//! Output persistence.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for sink writes.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Filesystem failure while persisting a unit.
    #[error("failed to write unit '{unit}': {source}")]
    Io {
        /// Unit name.
        unit: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Destination for generated compilation units.
pub trait Sink {
    /// Persists one unit's content.
    ///
    /// # Errors
    /// Returns `SinkError` if the content cannot be persisted. Sink
    /// failures are fatal to the run; partial output is not resumable.
    fn write(&self, unit_name: &str, content: &str) -> Result<(), SinkError>;
}

/// Sink writing each unit to `<root>/<unit>/mod.rs`.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at the given output directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the file path a unit is written to.
    #[must_use]
    pub fn unit_path(&self, unit_name: &str) -> PathBuf {
        self.root.join(unit_name).join("mod.rs")
    }
}

impl Sink for DirectorySink {
    fn write(&self, unit_name: &str, content: &str) -> Result<(), SinkError> {
        let dir = self.root.join(unit_name);
        fs::create_dir_all(&dir).map_err(|source| SinkError::Io {
            unit: unit_name.to_string(),
            source,
        })?;
        fs::write(dir.join("mod.rs"), content).map_err(|source| SinkError::Io {
            unit: unit_name.to_string(),
            source,
        })?;
        Ok(())
    }
}
