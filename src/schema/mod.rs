//! Schema validation subsystem
//!
//! Turns untyped JSON into validated, transformed JSON against a declarative
//! schema. The schema knows nothing about advertisements; domain-specific
//! parsing is plugged in through transformer nodes.
//!
//! # Design Principles
//!
//! - Schemas are checked once, before any document is validated
//! - Validation is a pure transform; input documents are never mutated
//! - All failures are accumulated, never short-circuited
//! - No coercion: scalar types match exactly

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity, ValidationDetails};
pub use types::{ScalarKind, SchemaNode, TransformFn, Transformer};
pub use validator::{SchemaValidator, Validation};
