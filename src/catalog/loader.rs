//! Catalog loading
//!
//! Load sequence:
//! 1. Verify the checksum against the raw bytes (nothing is parsed before this)
//! 2. Parse JSON
//! 3. Validate and transform against the catalog schema
//! 4. Decode into typed records
//!
//! Any failure rejects the whole catalog; no partial catalog is produced.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info};

use crate::schema::SchemaValidator;

use super::checksum::verify_checksum;
use super::errors::{CatalogError, CatalogResult};
use super::format::catalog_schema;
use super::types::Catalog;

/// Catalog file name inside the ads directory
pub const AD_FILE_NAME: &str = "banner_ads.json";

/// Checksum file name inside the ads directory
pub const CHECKSUM_FILE_NAME: &str = "banner_ads.md5";

/// Loads a catalog from its exact file bytes and companion checksum line.
pub fn load(catalog_bytes: &[u8], checksum_line: &str) -> CatalogResult<Catalog> {
    verify_checksum(catalog_bytes, checksum_line)?;

    let raw: Value = serde_json::from_slice(catalog_bytes).map_err(CatalogError::Json)?;

    let schema = catalog_schema();
    let validator = SchemaValidator::new(&schema)?;
    let validated = validator.validate_document("catalog", &raw)?;

    let catalog: Catalog = serde_json::from_value(validated).map_err(CatalogError::Decode)?;
    debug!(
        version = catalog.version,
        pub_timestamp = catalog.pub_timestamp,
        ads = catalog.len(),
        "catalog decoded"
    );
    Ok(catalog)
}

/// Location of a catalog and its checksum on disk.
#[derive(Debug, Clone)]
pub struct CatalogFiles {
    dir: PathBuf,
}

impl CatalogFiles {
    /// Catalog files inside `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join(AD_FILE_NAME)
    }

    pub fn checksum_path(&self) -> PathBuf {
        self.dir.join(CHECKSUM_FILE_NAME)
    }

    /// Reads both files and loads the catalog.
    ///
    /// Only the first line of the checksum file is considered.
    pub fn load(&self) -> CatalogResult<Catalog> {
        info!(dir = %self.dir.display(), "loading ad content");

        let checksum_path = self.checksum_path();
        let checksum_text = match fs::read_to_string(&checksum_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!(path = %checksum_path.display(), "checksum file does not exist");
                return Err(CatalogError::ChecksumMissing { path: checksum_path });
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: checksum_path,
                    source,
                })
            }
        };
        let checksum_line = checksum_text.lines().next().unwrap_or("");

        let catalog_path = self.catalog_path();
        let bytes = fs::read(&catalog_path).map_err(|source| CatalogError::Io {
            path: catalog_path.clone(),
            source,
        })?;

        match load(&bytes, checksum_line) {
            Ok(catalog) => {
                info!(
                    path = %catalog_path.display(),
                    version = catalog.version,
                    ads = catalog.len(),
                    "finished loading ad content"
                );
                Ok(catalog)
            }
            Err(e) => {
                error!(path = %catalog_path.display(), code = e.code(), error = %e, "failed to load ad content");
                Err(e)
            }
        }
    }
}

/// Loads `banner_ads.json` / `banner_ads.md5` from `dir`.
pub fn load_dir(dir: &Path) -> CatalogResult<Catalog> {
    CatalogFiles::new(dir).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::checksum::md5_hex;
    use crate::catalog::ErrorClass;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "version": 2,
        "pub_timestamp": 1526806800,
        "ad_content": [
            {
                "id": 1,
                "content": { "img_url": "img_url_1" },
                "display_period": {
                    "start": "20180101:00:00:00",
                    "end": "20180201:00:00:00",
                    "time_zone": "UTC"
                }
            },
            {
                "id": 2,
                "content": { "img_url": "img_url_2" },
                "display_period": {
                    "start": "20180520:18:00:00",
                    "end": "20180520:19:00:00",
                    "time_zone": "Japan"
                }
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_catalog() {
        let catalog = load(SAMPLE.as_bytes(), &md5_hex(SAMPLE.as_bytes())).unwrap();
        assert_eq!(catalog.version, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ad_content[0].display_period.start_time, 1_514_764_800);
        assert_eq!(catalog.ad_content[1].display_period.start_time, 1_526_806_800);
        assert_eq!(catalog.ad_content[1].content.img_url, "img_url_2");
    }

    #[test]
    fn test_checksum_checked_before_parsing() {
        let garbage = b"not json at all";
        let err = load(garbage, &"0".repeat(32)).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Integrity);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let garbage = b"{\"version\": ";
        let err = load(garbage, &md5_hex(garbage)).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert_eq!(err.class(), ErrorClass::Validation);
    }

    #[test]
    fn test_schema_violation_rejects_whole_catalog() {
        let doc = SAMPLE.replace("\"Japan\"", "\"Atlantis\"");
        let err = load(doc.as_bytes(), &md5_hex(doc.as_bytes())).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Validation);
        match err {
            CatalogError::Schema(e) => {
                assert_eq!(e.details().len(), 1);
                assert_eq!(e.details()[0].field, "ad_content[1].display_period");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(AD_FILE_NAME), SAMPLE).unwrap();
        fs::write(
            tmp.path().join(CHECKSUM_FILE_NAME),
            format!("{}\n", md5_hex(SAMPLE.as_bytes())),
        )
        .unwrap();

        let catalog = load_dir(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_dir_missing_checksum() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(AD_FILE_NAME), SAMPLE).unwrap();

        let err = load_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::ChecksumMissing { .. }));
        assert_eq!(err.class(), ErrorClass::Integrity);
    }

    #[test]
    fn test_load_dir_missing_catalog() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CHECKSUM_FILE_NAME), "0".repeat(32)).unwrap();

        let err = load_dir(tmp.path()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Io);
    }
}
