//! Record struct code generation.

use crate::rust::types::rust_type;
use cqlgen_schema::RecordDefinition;

/// Generator for one record struct definition.
pub struct RecordGenerator<'a> {
    record: &'a RecordDefinition,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(record: &'a RecordDefinition) -> Self {
        Self { record }
    }

    /// Generates the struct definition.
    ///
    /// Fields appear in the record's field order; every field carries its
    /// original column name as a serde rename tag so serialization round-
    /// trips independently of identifier casing.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "/// Record for table `{}`.\n",
            self.record.table_name
        ));
        output.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
        output.push_str(&format!("pub struct {} {{\n", self.record.name));

        for field in &self.record.fields {
            output.push_str(&format!(
                "    #[serde(rename = \"{}\")]\n",
                field.column_name
            ));
            output.push_str(&format!(
                "    pub {}: {},\n",
                field.ident,
                rust_type(&field.ty)
            ));
        }

        output.push_str("}\n");
        output
    }
}
