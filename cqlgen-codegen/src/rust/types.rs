//! Rust type rendering for CQL type descriptors.

use cqlgen_schema::CqlType;

/// Renders a CQL type descriptor as Rust source text.
///
/// Scalars render to their fixed Rust types; collections render to the
/// corresponding parameterized container.
#[must_use]
pub fn rust_type(ty: &CqlType) -> String {
    match ty {
        CqlType::Scalar(scalar) => scalar.rust_type().to_string(),
        CqlType::List(elem) => format!("Vec<{}>", rust_type(elem)),
        CqlType::Set(elem) => format!("HashSet<{}>", rust_type(elem)),
        CqlType::Map(key, value) => format!("HashMap<{}, {}>", rust_type(key), rust_type(value)),
    }
}
