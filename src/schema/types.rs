//! Schema node definitions
//!
//! A schema is a tree of nodes:
//! - scalar: exact JSON type match (integer, string)
//! - transformer: a function that checks a raw value and produces a typed one
//! - list: every element matches a single child node
//! - object: every declared field is present and matches its node

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};

/// Signature of a field transformer.
///
/// Returns the transformed value, or a human-readable reason on failure.
pub type TransformFn = fn(&Value) -> Result<Value, String>;

/// Scalar kinds supported by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// 64-bit signed integer
    Integer,
    /// UTF-8 string
    String,
}

impl ScalarKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Integer => "int",
            ScalarKind::String => "string",
        }
    }

    /// Returns whether the value's runtime type is exactly this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ScalarKind::Integer => value.is_i64(),
            ScalarKind::String => value.is_string(),
        }
    }
}

/// A named field transformer
#[derive(Clone, Copy)]
pub struct Transformer {
    /// Name used in failure reports
    pub name: &'static str,
    /// The transform itself
    pub apply: TransformFn,
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer").field("name", &self.name).finish()
    }
}

/// A schema node
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// Exact scalar type
    Scalar(ScalarKind),
    /// Custom field handler
    Transformer(Transformer),
    /// Homogeneous list
    ListOf(Box<SchemaNode>),
    /// Object with declared fields, in declaration order
    ObjectOf(Vec<(String, SchemaNode)>),
}

impl SchemaNode {
    /// An integer scalar
    pub fn int() -> Self {
        SchemaNode::Scalar(ScalarKind::Integer)
    }

    /// A string scalar
    pub fn string() -> Self {
        SchemaNode::Scalar(ScalarKind::String)
    }

    /// A transformer node
    pub fn transform(name: &'static str, apply: TransformFn) -> Self {
        SchemaNode::Transformer(Transformer { name, apply })
    }

    /// A list whose elements all match `element`
    pub fn list_of(element: SchemaNode) -> Self {
        SchemaNode::ListOf(Box::new(element))
    }

    /// An object with the given declared fields
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, SchemaNode)>) -> Self {
        SchemaNode::ObjectOf(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Scalar(kind) => kind.type_name(),
            SchemaNode::Transformer(t) => t.name,
            SchemaNode::ListOf(_) => "list",
            SchemaNode::ObjectOf(_) => "object",
        }
    }

    /// Validates the schema structure itself (not a document).
    ///
    /// Object nodes must not declare empty or duplicate field names.
    pub fn check_structure(&self) -> SchemaResult<()> {
        self.check_at("$root")
    }

    fn check_at(&self, path: &str) -> SchemaResult<()> {
        match self {
            SchemaNode::Scalar(_) | SchemaNode::Transformer(_) => Ok(()),
            SchemaNode::ListOf(element) => element.check_at(&format!("{}[]", path)),
            SchemaNode::ObjectOf(fields) => {
                let mut seen = HashSet::with_capacity(fields.len());
                for (name, node) in fields {
                    if name.is_empty() {
                        return Err(SchemaError::malformed_schema(path, "empty field name"));
                    }
                    if !seen.insert(name.as_str()) {
                        return Err(SchemaError::malformed_schema(
                            path,
                            format!("field '{}' declared more than once", name),
                        ));
                    }
                    node.check_at(&format!("{}.{}", path, name))?;
                }
                Ok(())
            }
        }
    }
}
