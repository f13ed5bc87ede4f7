//! Catalog integrity check
//!
//! The companion checksum is the lowercase hex MD5 digest of the catalog
//! file's exact bytes. It is verified before the catalog is parsed.

use md5::{Digest, Md5};
use subtle::ConstantTimeEq;

use super::errors::{CatalogError, CatalogResult};

/// Length of a hex-encoded MD5 digest
pub const CHECKSUM_LEN: usize = 32;

/// Computes the lowercase hex MD5 digest of `bytes`.
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}

/// Verifies `bytes` against a checksum line.
///
/// Surrounding whitespace (including the trailing newline) is ignored.
pub fn verify_checksum(bytes: &[u8], checksum_line: &str) -> CatalogResult<()> {
    let expected = checksum_line.trim();
    if !is_hex_digest(expected) {
        return Err(CatalogError::MalformedChecksum {
            found: expected.to_string(),
        });
    }

    let actual = md5_hex(bytes);
    if bool::from(actual.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(CatalogError::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}

fn is_hex_digest(text: &str) -> bool {
    text.len() == CHECKSUM_LEN && text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
