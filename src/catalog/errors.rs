//! # Catalog Errors
//!
//! Every load-time failure rejects the whole catalog. Errors are grouped into
//! classes so callers can tell a corrupt file from a bad document from a
//! broken schema definition.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Broad classification of catalog load failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Schema definition is defective (FATAL, not data-dependent)
    Config,
    /// Document fails structural, type or transform checks
    Validation,
    /// Checksum missing, malformed or mismatched
    Integrity,
    /// Catalog files could not be read
    Io,
}

/// Catalog load errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Checksum file not found: {}", path.display())]
    ChecksumMissing { path: PathBuf },

    #[error("Invalid checksum '{found}', expected 32 lowercase hex characters")]
    MalformedChecksum { found: String },

    #[error("Expected checksum to be {expected} but got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Failed to decode validated catalog: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// Returns the error class
    pub fn class(&self) -> ErrorClass {
        match self {
            CatalogError::ChecksumMissing { .. }
            | CatalogError::MalformedChecksum { .. }
            | CatalogError::ChecksumMismatch { .. } => ErrorClass::Integrity,
            CatalogError::Json(_) | CatalogError::Decode(_) => ErrorClass::Validation,
            CatalogError::Schema(e) if e.is_fatal() => ErrorClass::Config,
            CatalogError::Schema(_) => ErrorClass::Validation,
            CatalogError::Io { .. } => ErrorClass::Io,
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Schema(e) => e.code().code(),
            _ => match self.class() {
                ErrorClass::Config => "ADS_SCHEMA_MALFORMED",
                ErrorClass::Validation => "ADS_CATALOG_INVALID",
                ErrorClass::Integrity => "ADS_CATALOG_INTEGRITY",
                ErrorClass::Io => "ADS_CATALOG_IO",
            },
        }
    }

    /// Returns whether this error must stop startup regardless of the data
    pub fn is_fatal(&self) -> bool {
        self.class() == ErrorClass::Config
    }
}
