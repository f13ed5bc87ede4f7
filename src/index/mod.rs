//! Ad search engine
//!
//! The index is derived state: built once from a validated catalog and
//! read-only afterwards.
//!
//! # Invariants
//!
//! - One interval entry per catalog record
//! - Entries sorted by `(end_time, id)`, so results are deterministic
//! - Window bounds are inclusive at both ends
//! - Every id in the interval sequence resolves through the id map

mod interval;

pub use interval::{IntervalEntry, IntervalIndex};

use crate::catalog::Catalog;

/// Builds the search index for a loaded catalog.
pub fn build_index(catalog: Catalog) -> IntervalIndex {
    IntervalIndex::build(catalog)
}
