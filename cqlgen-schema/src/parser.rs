//! CQL column type parser.
//!
//! This module turns raw catalog type tokens such as `map<text, int>` into
//! [`CqlType`] descriptor trees. Collection bodies are scanned with explicit
//! `<`/`>` depth tracking, so an inner map's comma is never mistaken for the
//! outer separator.

use crate::error::ParseError;
use crate::types::{CqlType, ScalarType};

/// Parses a raw catalog column type into a [`CqlType`] descriptor.
///
/// The grammar is case-insensitive and tolerates whitespace around every
/// token:
///
/// ```text
/// TYPE   := MAP | LIST | SET | SCALAR
/// MAP    := "map<" TYPE "," TYPE ">"
/// LIST   := "list<" TYPE ">"
/// SET    := "set<" TYPE ">"
/// SCALAR := one of the fixed scalar names
/// ```
///
/// # Errors
/// Returns `ParseError::UnknownType` for tokens matching no rule (including
/// `frozen<...>`, UDT and custom types) and `ParseError::Malformed` for
/// collection bodies that violate the grammar.
pub fn parse_cql_type(raw: &str) -> Result<CqlType, ParseError> {
    let lowered = raw.to_ascii_lowercase();
    parse_type(&lowered)
}

/// Parses one type region, recursing into collection bodies.
fn parse_type(token: &str) -> Result<CqlType, ParseError> {
    let token = token.trim();

    if let Some(body) = collection_body(token, "map")? {
        let (key, value) = split_pair(token, body)?;
        return Ok(CqlType::Map(
            Box::new(parse_type(key)?),
            Box::new(parse_type(value)?),
        ));
    }
    if let Some(body) = collection_body(token, "list")? {
        return Ok(CqlType::List(Box::new(parse_type(single(token, body)?)?)));
    }
    if let Some(body) = collection_body(token, "set")? {
        return Ok(CqlType::Set(Box::new(parse_type(single(token, body)?)?)));
    }

    ScalarType::from_cql_name(token)
        .map(CqlType::Scalar)
        .ok_or_else(|| ParseError::unknown(token))
}

/// Returns the body of `keyword<...>` if `token` is that collection.
///
/// `Ok(None)` means the token is not this collection at all; a matching
/// prefix without a closing `>` is malformed rather than a scalar.
fn collection_body<'a>(token: &'a str, keyword: &str) -> Result<Option<&'a str>, ParseError> {
    let Some(rest) = token.strip_prefix(keyword) else {
        return Ok(None);
    };
    let Some(inner) = rest.strip_prefix('<') else {
        return Ok(None);
    };
    let Some(body) = inner.strip_suffix('>') else {
        return Err(ParseError::malformed(token, "missing closing '>'"));
    };
    Ok(Some(body))
}

/// Splits a map body into its key and value regions at the top-level comma.
///
/// The scan tracks `<`/`>` nesting depth; commas inside nested collections
/// are ignored.
fn split_pair<'a>(token: &str, body: &'a str) -> Result<(&'a str, &'a str), ParseError> {
    let mut depth: usize = 0;
    let mut split = None;

    for (i, c) in body.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::malformed(token, "unbalanced angle brackets"))?;
            }
            ',' if depth == 0 => {
                if split.is_some() {
                    return Err(ParseError::malformed(
                        token,
                        "map takes exactly two type parameters",
                    ));
                }
                split = Some(i);
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::malformed(token, "unbalanced angle brackets"));
    }
    let Some(i) = split else {
        return Err(ParseError::malformed(
            token,
            "map takes exactly two type parameters",
        ));
    };

    let (key, value) = (&body[..i], &body[i + 1..]);
    if key.trim().is_empty() || value.trim().is_empty() {
        return Err(ParseError::malformed(token, "empty type parameter"));
    }
    Ok((key, value))
}

/// Validates a list/set body as a single balanced type region.
fn single<'a>(token: &str, body: &'a str) -> Result<&'a str, ParseError> {
    let mut depth: usize = 0;

    for c in body.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::malformed(token, "unbalanced angle brackets"))?;
            }
            ',' if depth == 0 => {
                return Err(ParseError::malformed(
                    token,
                    "expected a single type parameter",
                ));
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::malformed(token, "unbalanced angle brackets"));
    }
    if body.trim().is_empty() {
        return Err(ParseError::malformed(token, "empty type parameter"));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: ScalarType) -> CqlType {
        CqlType::Scalar(s)
    }

    #[test]
    fn test_parse_scalars() {
        let cases = [
            ("boolean", ScalarType::Boolean),
            ("text", ScalarType::Text),
            ("varchar", ScalarType::Text),
            ("int", ScalarType::Int),
            ("bigint", ScalarType::BigInt),
            ("tinyint", ScalarType::TinyInt),
            ("smallint", ScalarType::SmallInt),
            ("float", ScalarType::Float),
            ("double", ScalarType::Double),
            ("decimal", ScalarType::Decimal),
            ("timestamp", ScalarType::Timestamp),
            ("date", ScalarType::Date),
            ("time", ScalarType::Time),
            ("blob", ScalarType::Blob),
            ("uuid", ScalarType::Uuid),
            ("timeuuid", ScalarType::Uuid),
        ];
        for (name, expected) in cases {
            assert_eq!(parse_cql_type(name).unwrap(), scalar(expected), "{name}");
        }
    }

    #[test]
    fn test_parse_scalar_case_and_whitespace() {
        assert_eq!(parse_cql_type(" UUID ").unwrap(), scalar(ScalarType::Uuid));
        assert_eq!(parse_cql_type("Boolean").unwrap(), scalar(ScalarType::Boolean));
        assert_eq!(parse_cql_type("\tBigInt\n").unwrap(), scalar(ScalarType::BigInt));
    }

    #[test]
    fn test_parse_unknown_scalar() {
        assert_eq!(
            parse_cql_type("counter"),
            Err(ParseError::unknown("counter"))
        );
        assert_eq!(
            parse_cql_type("duration"),
            Err(ParseError::unknown("duration"))
        );
        assert!(parse_cql_type("").is_err());
    }

    #[test]
    fn test_parse_frozen_and_udt_are_unknown() {
        assert_eq!(
            parse_cql_type("frozen<map<text, int>>"),
            Err(ParseError::unknown("frozen<map<text, int>>"))
        );
        assert_eq!(
            parse_cql_type("address_type"),
            Err(ParseError::unknown("address_type"))
        );
    }

    #[test]
    fn test_parse_simple_collections() {
        assert_eq!(
            parse_cql_type("list<text>").unwrap(),
            CqlType::List(Box::new(scalar(ScalarType::Text)))
        );
        assert_eq!(
            parse_cql_type("set<uuid>").unwrap(),
            CqlType::Set(Box::new(scalar(ScalarType::Uuid)))
        );
        assert_eq!(
            parse_cql_type("map<text, int>").unwrap(),
            CqlType::Map(
                Box::new(scalar(ScalarType::Text)),
                Box::new(scalar(ScalarType::Int))
            )
        );
    }

    #[test]
    fn test_parse_collection_whitespace() {
        assert_eq!(
            parse_cql_type("map< text , int >").unwrap(),
            CqlType::Map(
                Box::new(scalar(ScalarType::Text)),
                Box::new(scalar(ScalarType::Int))
            )
        );
    }

    #[test]
    fn test_parse_nested_map_comma() {
        // The inner map's comma must not split the outer body.
        assert_eq!(
            parse_cql_type("map<text, map<int, int>>").unwrap(),
            CqlType::Map(
                Box::new(scalar(ScalarType::Text)),
                Box::new(CqlType::Map(
                    Box::new(scalar(ScalarType::Int)),
                    Box::new(scalar(ScalarType::Int))
                ))
            )
        );
    }

    #[test]
    fn test_parse_map_with_collection_key() {
        assert_eq!(
            parse_cql_type("map<map<text, text>, int>").unwrap(),
            CqlType::Map(
                Box::new(CqlType::Map(
                    Box::new(scalar(ScalarType::Text)),
                    Box::new(scalar(ScalarType::Text))
                )),
                Box::new(scalar(ScalarType::Int))
            )
        );
    }

    #[test]
    fn test_parse_deep_nesting() {
        assert_eq!(
            parse_cql_type("list<set<map<uuid, list<text>>>>").unwrap(),
            CqlType::List(Box::new(CqlType::Set(Box::new(CqlType::Map(
                Box::new(scalar(ScalarType::Uuid)),
                Box::new(CqlType::List(Box::new(scalar(ScalarType::Text))))
            )))))
        );
    }

    #[test]
    fn test_parse_malformed_collections() {
        assert!(matches!(
            parse_cql_type("map<text>"),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cql_type("map<text, int, int>"),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cql_type("list<text, int>"),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cql_type("map<text, int"),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cql_type("list<>"),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cql_type("map<, int>"),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cql_type("map<text, int>>"),
            Err(ParseError::Malformed { .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        // Wrap a scalar in alternating collections and check that rendering
        // and re-parsing reproduces the descriptor at every depth.
        let mut ty = scalar(ScalarType::Uuid);
        for depth in 0..5 {
            let rendered = ty.to_string();
            assert_eq!(parse_cql_type(&rendered).unwrap(), ty, "depth {depth}");
            ty = match depth % 3 {
                0 => CqlType::List(Box::new(ty)),
                1 => CqlType::Set(Box::new(ty)),
                _ => CqlType::Map(Box::new(scalar(ScalarType::Text)), Box::new(ty)),
            };
        }
    }
}
