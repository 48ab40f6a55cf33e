//! Per-run generation summary.

use std::fmt;

/// A table that was skipped, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedTable {
    /// Table name.
    pub table: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Summary of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Tables that produced a record definition.
    pub generated: Vec<String>,
    /// Tables skipped, in encounter order.
    pub skipped: Vec<SkippedTable>,
}

impl GenerationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a generated table.
    pub fn record_generated(&mut self, table: impl Into<String>) {
        self.generated.push(table.into());
    }

    /// Records a skipped table with its reason.
    pub fn record_skipped(&mut self, table: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedTable {
            table: table.into(),
            reason: reason.into(),
        });
    }

    /// Returns true if no table produced a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} table(s), skipped {}",
            self.generated.len(),
            self.skipped.len()
        )?;
        for table in &self.generated {
            writeln!(f, "  + {table}")?;
        }
        for skipped in &self.skipped {
            writeln!(f, "  - {} ({})", skipped.table, skipped.reason)?;
        }
        Ok(())
    }
}
