//! Compilation unit assembly.

use crate::rust::RecordGenerator;
use cqlgen_schema::RecordDefinition;

/// Generator for one keyspace compilation unit.
pub struct Generator<'a> {
    keyspace: &'a str,
    records: &'a [RecordDefinition],
}

impl<'a> Generator<'a> {
    /// Creates a new generator over an ordered record set.
    #[must_use]
    pub fn new(keyspace: &'a str, records: &'a [RecordDefinition]) -> Self {
        Self { keyspace, records }
    }

    /// Generates the unit source text.
    ///
    /// Output is a pure function of the input: identical record sequences
    /// produce byte-identical text.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_header();

        for record in self.records {
            output.push('\n');
            output.push_str(&RecordGenerator::new(record).generate());
        }

        output
    }

    /// Generates the unit header: doc lines, lint allowances and imports.
    fn generate_header(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "//! Records generated from keyspace `{}`.\n",
            self.keyspace
        ));
        output.push_str("//!\n");
        output.push_str("//! Generated by cqlgen. Do not edit by hand.\n\n");
        output.push_str("#![allow(unused_imports, clippy::all)]\n\n");
        output.push_str("use bigdecimal::BigDecimal;\n");
        output.push_str("use chrono::{DateTime, NaiveDate, NaiveTime, Utc};\n");
        output.push_str("use serde::{Deserialize, Serialize};\n");
        output.push_str("use std::collections::{HashMap, HashSet};\n");
        output.push_str("use uuid::Uuid;\n");

        output
    }
}
