//! Schema validator for untyped JSON documents
//!
//! Validation semantics:
//! - Every declared field is present and matches its node
//! - Scalar types match exactly (no coercion)
//! - Transformers replace the raw value with their output
//! - Undeclared fields are passed through untouched
//!
//! Validation never short-circuits: every field is examined and every failure
//! is recorded, so a single pass reports all problems in a document.
//! The input is never mutated; a new transformed document is returned.

use serde_json::{Map, Value};
use tracing::warn;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::SchemaNode;

/// Outcome of validating one document.
#[derive(Debug, Clone)]
pub struct Validation {
    value: Value,
    failures: Vec<ValidationDetails>,
}

impl Validation {
    /// Returns true if the document satisfied the schema
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// The transformed document. Only meaningful when `is_ok()`.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Every failure found, in schema declaration order
    pub fn failures(&self) -> &[ValidationDetails] {
        &self.failures
    }

    /// Converts into the transformed document, or a REJECT error carrying all failures.
    pub fn into_result(self, document: &str) -> SchemaResult<Value> {
        if self.failures.is_empty() {
            Ok(self.value)
        } else {
            Err(SchemaError::validation_failed(document, self.failures))
        }
    }
}

/// Schema validator bound to a structurally checked schema.
pub struct SchemaValidator<'a> {
    schema: &'a SchemaNode,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator after checking the schema structure.
    ///
    /// # Errors
    ///
    /// Returns a FATAL `SchemaError` (ADS_SCHEMA_MALFORMED) if the schema
    /// itself is defective.
    pub fn new(schema: &'a SchemaNode) -> SchemaResult<Self> {
        schema.check_structure()?;
        Ok(Self { schema })
    }

    /// Validates and transforms a document.
    pub fn validate(&self, document: &Value) -> Validation {
        let mut failures = Vec::new();
        let value = validate_node(self.schema, document, "", &mut failures);
        Validation { value, failures }
    }

    /// Validates a document and returns the transformed value or the failures.
    ///
    /// `document` names the document in error messages.
    pub fn validate_document(&self, document: &str, value: &Value) -> SchemaResult<Value> {
        self.validate(value).into_result(document)
    }
}

fn validate_node(
    node: &SchemaNode,
    value: &Value,
    path: &str,
    failures: &mut Vec<ValidationDetails>,
) -> Value {
    match node {
        SchemaNode::Scalar(kind) => {
            if !kind.matches(value) {
                record(
                    failures,
                    ValidationDetails::type_mismatch(display_path(path), kind.type_name(), json_type_name(value)),
                );
            }
            value.clone()
        }
        SchemaNode::Transformer(transformer) => match (transformer.apply)(value) {
            Ok(output) => output,
            Err(reason) => {
                record(
                    failures,
                    ValidationDetails::transform_failed(display_path(path), transformer.name, reason),
                );
                value.clone()
            }
        },
        SchemaNode::ListOf(element) => match value.as_array() {
            Some(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| validate_node(element, item, &format!("{}[{}]", path, i), failures))
                    .collect(),
            ),
            None => {
                record(
                    failures,
                    ValidationDetails::type_mismatch(display_path(path), "list", json_type_name(value)),
                );
                value.clone()
            }
        },
        SchemaNode::ObjectOf(fields) => match value.as_object() {
            Some(obj) => {
                let mut out = Map::new();
                for (name, child) in fields {
                    let field_path = make_path(path, name);
                    match obj.get(name) {
                        Some(field_value) => {
                            let transformed = validate_node(child, field_value, &field_path, failures);
                            out.insert(name.clone(), transformed);
                        }
                        None => record(failures, ValidationDetails::missing_field(field_path)),
                    }
                }
                for (key, field_value) in obj {
                    if !out.contains_key(key) {
                        out.insert(key.clone(), field_value.clone());
                    }
                }
                Value::Object(out)
            }
            None => {
                record(
                    failures,
                    ValidationDetails::type_mismatch(display_path(path), "object", json_type_name(value)),
                );
                value.clone()
            }
        },
    }
}

fn record(failures: &mut Vec<ValidationDetails>, details: ValidationDetails) {
    warn!(
        field = %details.field,
        expected = %details.expected,
        actual = %details.actual,
        "schema validation failure"
    );
    failures.push(details);
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "$root".to_string()
    } else {
        path.to_string()
    }
}
