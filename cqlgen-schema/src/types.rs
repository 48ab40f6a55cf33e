//! CQL column type definitions.
//!
//! This module contains the data structures describing what the catalog
//! reports about a table: its columns, their raw type tokens and the parsed
//! type descriptor tree.

use std::fmt;

/// CQL scalar column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `boolean`.
    Boolean,
    /// `text` (alias `varchar`).
    Text,
    /// Signed 32-bit integer (`int`).
    Int,
    /// Signed 64-bit integer (`bigint`).
    BigInt,
    /// Signed 8-bit integer (`tinyint`).
    TinyInt,
    /// Signed 16-bit integer (`smallint`).
    SmallInt,
    /// 32-bit floating point (`float`).
    Float,
    /// 64-bit floating point (`double`).
    Double,
    /// Arbitrary-precision decimal (`decimal`).
    Decimal,
    /// Millisecond-precision instant (`timestamp`).
    Timestamp,
    /// Calendar date (`date`).
    Date,
    /// Time of day (`time`).
    Time,
    /// Raw bytes (`blob`).
    Blob,
    /// Unique identifier (`uuid`, alias `timeuuid`).
    Uuid,
}

impl ScalarType {
    /// Parses a scalar type from its CQL name.
    ///
    /// Accepts the aliases the catalog may report: `varchar` for text and
    /// `timeuuid` for uuid.
    #[must_use]
    pub fn from_cql_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "text" | "varchar" => Some(Self::Text),
            "int" => Some(Self::Int),
            "bigint" => Some(Self::BigInt),
            "tinyint" => Some(Self::TinyInt),
            "smallint" => Some(Self::SmallInt),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "decimal" => Some(Self::Decimal),
            "timestamp" => Some(Self::Timestamp),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "blob" => Some(Self::Blob),
            "uuid" | "timeuuid" => Some(Self::Uuid),
            _ => None,
        }
    }

    /// Returns the canonical CQL name.
    #[must_use]
    pub const fn cql_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Date => "date",
            Self::Time => "time",
            Self::Blob => "blob",
            Self::Uuid => "uuid",
        }
    }

    /// Returns the Rust type this scalar renders to.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Text => "String",
            Self::Int => "i32",
            Self::BigInt => "i64",
            Self::TinyInt => "i8",
            Self::SmallInt => "i16",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Decimal => "BigDecimal",
            Self::Timestamp => "DateTime<Utc>",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::Blob => "Vec<u8>",
            Self::Uuid => "Uuid",
        }
    }
}

/// Parsed CQL column type descriptor.
///
/// Every node is fully resolved; no variant carries an unparsed type string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CqlType {
    /// A scalar type.
    Scalar(ScalarType),
    /// `list<elem>`.
    List(Box<CqlType>),
    /// `set<elem>`.
    Set(Box<CqlType>),
    /// `map<key, value>`.
    Map(Box<CqlType>, Box<CqlType>),
}

impl CqlType {
    /// Returns true if this is a scalar type.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true if this is a collection type.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        !self.is_scalar()
    }
}

impl fmt::Display for CqlType {
    /// Renders the canonical CQL spelling, e.g. `map<text, int>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(scalar.cql_name()),
            Self::List(elem) => write!(f, "list<{elem}>"),
            Self::Set(elem) => write!(f, "set<{elem}>"),
            Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
        }
    }
}

/// A single column as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name as stored in the catalog.
    pub name: String,
    /// Raw catalog type token, e.g. `"map<text, int>"`.
    pub raw_type: String,
}

impl ColumnDefinition {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

/// A table with its ordered column set.
///
/// Column order is canonical: generated record fields follow it verbatim,
/// so whoever builds a `TableSchema` must order columns deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name.
    pub name: String,
    /// Columns in canonical order.
    pub columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    /// Creates a new empty table schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Appends a column.
    pub fn add_column(&mut self, column: ColumnDefinition) {
        self.columns.push(column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_from_cql_name() {
        assert_eq!(ScalarType::from_cql_name("boolean"), Some(ScalarType::Boolean));
        assert_eq!(ScalarType::from_cql_name("bigint"), Some(ScalarType::BigInt));
        assert_eq!(ScalarType::from_cql_name("frozen"), None);
        assert_eq!(ScalarType::from_cql_name(""), None);
    }

    #[test]
    fn test_scalar_aliases() {
        assert_eq!(ScalarType::from_cql_name("varchar"), Some(ScalarType::Text));
        assert_eq!(ScalarType::from_cql_name("timeuuid"), Some(ScalarType::Uuid));
    }

    #[test]
    fn test_scalar_cql_name() {
        assert_eq!(ScalarType::Text.cql_name(), "text");
        assert_eq!(ScalarType::Uuid.cql_name(), "uuid");
        assert_eq!(ScalarType::SmallInt.cql_name(), "smallint");
    }

    #[test]
    fn test_scalar_rust_type() {
        assert_eq!(ScalarType::Boolean.rust_type(), "bool");
        assert_eq!(ScalarType::Int.rust_type(), "i32");
        assert_eq!(ScalarType::Decimal.rust_type(), "BigDecimal");
        assert_eq!(ScalarType::Blob.rust_type(), "Vec<u8>");
    }

    #[test]
    fn test_display_scalar() {
        assert_eq!(CqlType::Scalar(ScalarType::Text).to_string(), "text");
    }

    #[test]
    fn test_display_nested_map() {
        let ty = CqlType::Map(
            Box::new(CqlType::Scalar(ScalarType::Text)),
            Box::new(CqlType::Map(
                Box::new(CqlType::Scalar(ScalarType::Int)),
                Box::new(CqlType::Scalar(ScalarType::Int)),
            )),
        );
        assert_eq!(ty.to_string(), "map<text, map<int, int>>");
    }

    #[test]
    fn test_is_collection() {
        let scalar = CqlType::Scalar(ScalarType::Int);
        assert!(scalar.is_scalar());
        assert!(!scalar.is_collection());

        let list = CqlType::List(Box::new(scalar));
        assert!(list.is_collection());
    }

    #[test]
    fn test_table_schema_add_column() {
        let mut schema = TableSchema::new("users");
        schema.add_column(ColumnDefinition::new("id", "uuid"));
        schema.add_column(ColumnDefinition::new("name", "text"));

        assert_eq!(schema.columns.len(), 2);
        assert_eq!(schema.columns[0].name, "id");
        assert_eq!(schema.columns[1].raw_type, "text");
    }
}
