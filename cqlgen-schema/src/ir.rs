//! Codegen-ready record representation.
//!
//! This module turns catalog table schemas into record definitions with
//! Rust-safe identifiers and fully parsed column types, ready for source
//! rendering.

use crate::error::SchemaError;
use crate::parser::parse_cql_type;
use crate::types::{CqlType, TableSchema};
use std::collections::HashMap;

/// A single generated-record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Rust field identifier.
    pub ident: String,
    /// Original catalog column name, preserved verbatim for serialization.
    pub column_name: String,
    /// Parsed column type.
    pub ty: CqlType,
}

/// A generated record mirroring one table.
///
/// Constructed once per table and immutable afterwards; the emitter only
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefinition {
    /// Rust struct name.
    pub name: String,
    /// Source table name.
    pub table_name: String,
    /// Fields in canonical column order.
    pub fields: Vec<FieldDefinition>,
}

impl RecordDefinition {
    /// Assembles a record definition from a table schema.
    ///
    /// Fields follow `schema.columns` order exactly; each keeps its
    /// original column name alongside the transformed identifier.
    ///
    /// # Errors
    /// Returns `SchemaError::Parse` when a column type has no mapping and
    /// `SchemaError::IdentifierConflict` when two columns collapse to the
    /// same field identifier.
    pub fn from_table(schema: &TableSchema) -> Result<Self, SchemaError> {
        let mut fields = Vec::with_capacity(schema.columns.len());
        let mut seen: HashMap<String, String> = HashMap::new();

        for column in &schema.columns {
            let ty = parse_cql_type(&column.raw_type)?;
            let ident = field_ident(&column.name);

            if let Some(first) = seen.get(&ident) {
                return Err(SchemaError::IdentifierConflict {
                    table: schema.name.clone(),
                    first: first.clone(),
                    second: column.name.clone(),
                    identifier: ident,
                });
            }
            seen.insert(ident.clone(), column.name.clone());

            fields.push(FieldDefinition {
                ident,
                column_name: column.name.clone(),
                ty,
            });
        }

        Ok(Self {
            name: record_ident(&schema.name),
            table_name: schema.name.clone(),
            fields,
        })
    }
}

/// Converts a table name to a PascalCase record identifier.
///
/// Words are split on non-alphanumeric separators and case transitions.
/// Never returns an empty string; a name that would start with a non-letter
/// is prefixed with `T`.
#[must_use]
pub fn record_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for seg in segments(name) {
        let mut chars = seg.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() {
        return "Record".to_string();
    }
    if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        out.insert(0, 'T');
    }
    if out == "Self" {
        out.push('_');
    }
    out
}

/// Converts a column name to a snake_case field identifier.
///
/// Words are split the same way as [`record_ident`]. Rust keywords are
/// escaped with the `r#` prefix (trailing underscore for the few that
/// cannot be raw); a name that would start with a non-letter is prefixed
/// with `f_`.
#[must_use]
pub fn field_ident(name: &str) -> String {
    let mut out = segments(name).join("_");

    if out.is_empty() {
        return "field".to_string();
    }
    if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        out.insert_str(0, "f_");
    }
    escape_keyword(out)
}

/// Splits a name into lowercase word segments.
///
/// Segment boundaries are runs of non-alphanumeric characters and every
/// transition into an uppercase character.
fn segments(name: &str) -> Vec<String> {
    let mut segs = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                segs.push(std::mem::take(&mut current));
            }
        } else {
            if c.is_ascii_uppercase() && !current.is_empty() {
                segs.push(std::mem::take(&mut current));
            }
            current.push(c.to_ascii_lowercase());
        }
    }
    if !current.is_empty() {
        segs.push(current);
    }
    segs
}

/// Rust keywords that cannot appear as bare identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Escapes a keyword identifier so it is valid in generated source.
fn escape_keyword(ident: String) -> String {
    if !KEYWORDS.contains(&ident.as_str()) {
        return ident;
    }
    match ident.as_str() {
        // Not expressible as raw identifiers.
        "self" | "super" | "crate" => format!("{ident}_"),
        _ => format!("r#{ident}"),
    }
}
