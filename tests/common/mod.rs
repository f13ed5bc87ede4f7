//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use adserver::catalog::{md5_hex, AD_FILE_NAME, CHECKSUM_FILE_NAME};

/// Four ads across two zones. Ads 2 and 3 end at the same instant.
pub const CATALOG: &str = r#"{
    "version": 1,
    "pub_timestamp": 1526806800,
    "ad_content": [
        {
            "id": 1,
            "content": { "img_url": "img_url_1" },
            "display_period": { "start": "20180101:00:00:00", "end": "20180301:00:00:00", "time_zone": "UTC" }
        },
        {
            "id": 2,
            "content": { "img_url": "img_url_2" },
            "display_period": { "start": "20180601:00:00:00", "end": "20180719:12:05:01", "time_zone": "UTC" }
        },
        {
            "id": 3,
            "content": { "img_url": "img_url_3" },
            "display_period": { "start": "20180701:00:00:00", "end": "20180719:21:05:01", "time_zone": "Japan" }
        },
        {
            "id": 4,
            "content": { "img_url": "img_url_4" },
            "display_period": { "start": "19970102:18:00:00", "end": "19970102:20:00:00", "time_zone": "Japan" }
        }
    ]
}
"#;

/// Writes `body` and its correct checksum into `dir`.
pub fn write_catalog(dir: &Path, body: &str) {
    write_catalog_with_checksum(dir, body.as_bytes(), &format!("{}\n", md5_hex(body.as_bytes())));
}

/// Writes `body` with an arbitrary checksum file.
pub fn write_catalog_with_checksum(dir: &Path, body: &[u8], checksum: &str) {
    fs::write(dir.join(AD_FILE_NAME), body).unwrap();
    fs::write(dir.join(CHECKSUM_FILE_NAME), checksum).unwrap();
}
