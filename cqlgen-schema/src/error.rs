//! Error types for type parsing and record assembly.

use thiserror::Error;

/// Error type for CQL column type parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token matches no scalar or collection rule.
    #[error("unknown CQL type '{type_name}'")]
    UnknownType {
        /// The offending type token.
        type_name: String,
    },

    /// A collection token whose body does not follow the grammar.
    #[error("malformed CQL type '{type_name}': {message}")]
    Malformed {
        /// The offending type token.
        type_name: String,
        /// What is wrong with it.
        message: String,
    },
}

impl ParseError {
    /// Creates an unknown type error.
    pub fn unknown(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Creates a malformed type error.
    pub fn malformed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// Error type for table-to-record assembly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Column type parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two columns collapse to the same field identifier.
    #[error(
        "identifier conflict in table '{table}': columns '{first}' and '{second}' both map to '{identifier}'"
    )]
    IdentifierConflict {
        /// Table name.
        table: String,
        /// First column mapping to the identifier.
        first: String,
        /// Second column mapping to the identifier.
        second: String,
        /// The colliding identifier.
        identifier: String,
    },
}
