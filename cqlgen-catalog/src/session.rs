//! Catalog trait and the ScyllaDB-backed implementation.

use crate::error::CatalogError;
use async_trait::async_trait;
use cqlgen_schema::{ColumnDefinition, TableSchema};
use scylla::Session;

/// External schema catalog collaborator.
///
/// Answers the two queries the generation pipeline needs. Implementations
/// must return columns in a deterministic order; generated record fields
/// follow it verbatim.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Lists the table names of a keyspace.
    ///
    /// # Errors
    /// Returns `CatalogError` on connectivity or query failure.
    async fn table_names(&self, keyspace: &str) -> Result<Vec<String>, CatalogError>;

    /// Fetches the ordered column definitions of a table.
    ///
    /// # Errors
    /// Returns `CatalogError` on connectivity or query failure.
    async fn table_schema(&self, keyspace: &str, table: &str) -> Result<TableSchema, CatalogError>;
}

const TABLES_QUERY: &str =
    "SELECT table_name FROM system_schema.tables WHERE keyspace_name = ?";
const COLUMNS_QUERY: &str = "SELECT column_name, type, kind, position \
     FROM system_schema.columns WHERE keyspace_name = ? AND table_name = ?";

/// Catalog backed by a live ScyllaDB/Cassandra `system_schema`.
pub struct ScyllaCatalog {
    session: Session,
}

impl ScyllaCatalog {
    /// Wraps an established session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Catalog for ScyllaCatalog {
    async fn table_names(&self, keyspace: &str) -> Result<Vec<String>, CatalogError> {
        tracing::debug!("Fetching table names for keyspace {}", keyspace);

        let result = self.session.query_unpaged(TABLES_QUERY, (keyspace,)).await?;
        let rows = result
            .into_rows_result()
            .map_err(|e| CatalogError::response(e.to_string()))?;

        let mut names = Vec::new();
        for row in rows
            .rows::<(String,)>()
            .map_err(|e| CatalogError::response(e.to_string()))?
        {
            let (name,) = row.map_err(|e| CatalogError::response(e.to_string()))?;
            names.push(name);
        }
        Ok(names)
    }

    async fn table_schema(&self, keyspace: &str, table: &str) -> Result<TableSchema, CatalogError> {
        tracing::debug!("Fetching columns for table {}.{}", keyspace, table);

        let result = self
            .session
            .query_unpaged(COLUMNS_QUERY, (keyspace, table))
            .await?;
        let rows = result
            .into_rows_result()
            .map_err(|e| CatalogError::response(e.to_string()))?;

        let mut columns = Vec::new();
        for row in rows
            .rows::<(String, String, String, i32)>()
            .map_err(|e| CatalogError::response(e.to_string()))?
        {
            let (name, raw_type, kind, position) =
                row.map_err(|e| CatalogError::response(e.to_string()))?;
            columns.push(CatalogColumn {
                name,
                raw_type,
                kind,
                position,
            });
        }

        Ok(TableSchema {
            name: table.to_string(),
            columns: order_columns(columns),
        })
    }
}

/// Raw column row as returned by `system_schema.columns`.
struct CatalogColumn {
    name: String,
    raw_type: String,
    kind: String,
    position: i32,
}

/// Ranks a column kind for canonical ordering.
fn kind_rank(kind: &str) -> u8 {
    match kind {
        "partition_key" => 0,
        "clustering" => 1,
        "static" => 2,
        _ => 3,
    }
}

/// Orders catalog columns deterministically.
///
/// The catalog itself gives no order guarantee, so the canonical order is:
/// partition key columns by position, clustering columns by position, then
/// static, then regular columns, name-sorted within each group (regular
/// columns all carry position -1).
fn order_columns(mut columns: Vec<CatalogColumn>) -> Vec<ColumnDefinition> {
    columns.sort_by(|a, b| {
        (kind_rank(&a.kind), a.position, a.name.as_str())
            .cmp(&(kind_rank(&b.kind), b.position, b.name.as_str()))
    });
    columns
        .into_iter()
        .map(|c| ColumnDefinition::new(c.name, c.raw_type))
        .collect()
}
