//! adserver - time-windowed advertisement catalog and search engine
//!
//! Data flow: catalog bytes → checksum → schema validation (with time window
//! codecs) → `Catalog` → `IntervalIndex` → point-in-time searches.

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod config;
pub mod http_server;
pub mod index;
pub mod observability;
pub mod query;
pub mod schema;
