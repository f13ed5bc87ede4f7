//! Advertisement catalog
//!
//! Ingests the versioned catalog file: integrity check, schema validation with
//! time window parsing, and decoding into typed records.
//!
//! # Invariants
//!
//! - A checksum mismatch rejects the catalog before any parsing
//! - A catalog is either fully valid or rejected; never partially applied
//! - A loaded catalog is immutable

mod checksum;
mod errors;
mod format;
mod loader;
mod types;

pub use checksum::{md5_hex, verify_checksum, CHECKSUM_LEN};
pub use errors::{CatalogError, CatalogResult, ErrorClass};
pub use format::catalog_schema;
pub use loader::{load, load_dir, CatalogFiles, AD_FILE_NAME, CHECKSUM_FILE_NAME};
pub use types::{AdContent, AdId, AdRecord, Catalog, DisplayWindow};
