//! Keyspace generation pipeline.
//!
//! Fetches the table set from the catalog, assembles one record per table
//! and renders a single compilation unit. Table-level failures (unknown
//! column types, identifier conflicts, column-fetch errors) skip that table
//! and are reported; failure to list the keyspace's tables aborts the run.

use crate::report::GenerationReport;
use cqlgen_catalog::{Catalog, CatalogError};
use cqlgen_schema::RecordDefinition;

/// Result of generating one keyspace.
#[derive(Debug)]
pub struct KeyspaceUnit {
    /// Keyspace name (also the unit name).
    pub keyspace: String,
    /// Generated Rust source.
    pub content: String,
    /// Per-table outcome summary.
    pub report: GenerationReport,
}

/// Generates the compilation unit for a keyspace.
///
/// Tables are processed in name order, so output is deterministic whatever
/// order the catalog returns them in. A table whose record cannot be
/// assembled is skipped and reported; sibling tables are unaffected.
///
/// # Errors
/// Returns `CatalogError` if the table list itself cannot be fetched.
pub async fn generate_keyspace(
    catalog: &dyn Catalog,
    keyspace: &str,
) -> Result<KeyspaceUnit, CatalogError> {
    let mut tables = catalog.table_names(keyspace).await?;
    tables.sort();
    tracing::info!("Keyspace {} has {} table(s)", keyspace, tables.len());

    let mut records: Vec<RecordDefinition> = Vec::with_capacity(tables.len());
    let mut report = GenerationReport::new();

    for table in &tables {
        let schema = match catalog.table_schema(keyspace, table).await {
            Ok(schema) => schema,
            Err(e) => {
                tracing::warn!("Skipping table {}: {}", table, e);
                report.record_skipped(table.clone(), e.to_string());
                continue;
            }
        };

        match RecordDefinition::from_table(&schema) {
            Ok(record) => {
                report.record_generated(table.clone());
                records.push(record);
            }
            Err(e) => {
                tracing::warn!("Skipping table {}: {}", table, e);
                report.record_skipped(table.clone(), e.to_string());
            }
        }
    }

    let content = cqlgen_codegen::generate_unit(keyspace, &records);

    Ok(KeyspaceUnit {
        keyspace: keyspace.to_string(),
        content,
        report,
    })
}
