//! Schema error types
//!
//! Error codes:
//! - ADS_SCHEMA_MALFORMED (FATAL)
//! - ADS_SCHEMA_VALIDATION_FAILED (REJECT)

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The offending document is rejected as a whole
    Reject,
    /// The schema definition itself is broken; startup must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema definition is structurally invalid
    AdsSchemaMalformed,
    /// Document violates schema
    AdsSchemaValidationFailed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::AdsSchemaMalformed => "ADS_SCHEMA_MALFORMED",
            SchemaErrorCode::AdsSchemaValidationFailed => "ADS_SCHEMA_VALIDATION_FAILED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::AdsSchemaMalformed => Severity::Fatal,
            SchemaErrorCode::AdsSchemaValidationFailed => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field path (e.g., "ad_content[2].display_period")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn transform_failed(field: impl Into<String>, transformer: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: format!("value accepted by '{}'", transformer),
            actual: reason.into(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// Schema error type with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Every validation failure found in the document
    details: Vec<ValidationDetails>,
}

impl SchemaError {
    /// Create a malformed schema error
    pub fn malformed_schema(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::AdsSchemaMalformed,
            message: format!("Malformed schema at '{}': {}", location.into(), reason.into()),
            details: Vec::new(),
        }
    }

    /// Create a validation failed error carrying all accumulated failures
    pub fn validation_failed(document: impl Into<String>, details: Vec<ValidationDetails>) -> Self {
        let document = document.into();
        let message = match details.first() {
            Some(first) if details.len() == 1 => {
                format!("Document '{}' violates schema: {}", document, first)
            }
            Some(first) => format!(
                "Document '{}' violates schema: {} (and {} more)",
                document,
                first,
                details.len() - 1
            ),
            None => format!("Document '{}' violates schema", document),
        };
        Self {
            code: SchemaErrorCode::AdsSchemaValidationFailed,
            message,
            details,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the validation failures, empty for malformed schemas
    pub fn details(&self) -> &[ValidationDetails] {
        &self.details
    }

    /// Returns whether this error must stop the process
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
