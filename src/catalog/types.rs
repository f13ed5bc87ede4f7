//! Catalog data model
//!
//! A catalog is an immutable snapshot of advertisement records, created once
//! from validated bytes. Fields the schema does not declare are kept in
//! `extra` so the catalog serializes back to its full validated form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use crate::codec::DisplayWindow;

/// Advertisement identifier, unique within a catalog (assumed, not checked)
pub type AdId = i64;

/// Creative payload of an advertisement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdContent {
    pub img_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single advertisement with its display window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRecord {
    pub id: AdId,
    pub content: AdContent,
    pub display_period: DisplayWindow,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdRecord {
    pub fn new(id: AdId, img_url: impl Into<String>, display_period: DisplayWindow) -> Self {
        Self {
            id,
            content: AdContent {
                img_url: img_url.into(),
                extra: Map::new(),
            },
            display_period,
            extra: Map::new(),
        }
    }
}

/// A validated advertisement catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: i64,
    pub pub_timestamp: i64,
    pub ad_content: Vec<AdRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    pub fn new(version: i64, pub_timestamp: i64, ad_content: Vec<AdRecord>) -> Self {
        Self {
            version,
            pub_timestamp,
            ad_content,
            extra: Map::new(),
        }
    }

    /// Number of advertisement records
    pub fn len(&self) -> usize {
        self.ad_content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ad_content.is_empty()
    }
}
