//! Interval index over advertisement display windows
//!
//! Entries are `(start_time, end_time, id)` triples sorted ascending by
//! `(end_time, id)`. A point query binary-searches for the first entry whose
//! window has not yet ended, then scans the unexpired suffix.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::catalog::{AdId, AdRecord, Catalog};

/// One indexed display window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalEntry {
    pub start_time: i64,
    pub end_time: i64,
    pub id: AdId,
}

/// Read-only point-in-time index over a catalog.
///
/// Built once and never mutated. Replacing the catalog means building a new
/// index and swapping the shared handle.
#[derive(Debug)]
pub struct IntervalIndex {
    /// Record arena
    catalog: Catalog,
    /// Ad id -> position in `catalog.ad_content`
    slots: HashMap<AdId, usize>,
    /// Sorted by (end_time, id)
    entries: Vec<IntervalEntry>,
}

impl IntervalIndex {
    /// Builds the index, taking ownership of the catalog.
    ///
    /// Ids are assumed unique. If an id repeats, the later record wins the id
    /// map; both windows stay in the interval sequence.
    pub fn build(catalog: Catalog) -> Self {
        let mut slots = HashMap::with_capacity(catalog.len());
        let mut entries = Vec::with_capacity(catalog.len());

        for (slot, ad) in catalog.ad_content.iter().enumerate() {
            if slots.insert(ad.id, slot).is_some() {
                warn!(id = ad.id, "duplicate ad id in catalog");
            }
            entries.push(IntervalEntry {
                start_time: ad.display_period.start_time,
                end_time: ad.display_period.end_time,
                id: ad.id,
            });
        }
        entries.sort_by_key(|e| (e.end_time, e.id));

        debug!(
            version = catalog.version,
            entries = entries.len(),
            "interval index built"
        );

        Self {
            catalog,
            slots,
            entries,
        }
    }

    /// Returns the ids of ads active at `current_time`.
    ///
    /// With `all_active`, every ad that has not yet expired is returned,
    /// including ads whose window has not started. Both window ends are
    /// inclusive. Ids come back in `(end_time, id)` order.
    pub fn search_active(&self, current_time: i64, all_active: bool) -> Vec<AdId> {
        let first = self.first_unexpired(current_time);
        let unexpired = &self.entries[first..];

        if all_active {
            unexpired.iter().map(|e| e.id).collect()
        } else {
            unexpired
                .iter()
                .filter(|e| e.start_time <= current_time)
                .map(|e| e.id)
                .collect()
        }
    }

    /// Looks up records by id, preserving the order of `ids`.
    ///
    /// # Panics
    ///
    /// Panics if an id is unknown. Ids are expected to come from
    /// `search_active` on this same index, so a miss means the id map and the
    /// interval sequence have diverged.
    pub fn get_by_ids(&self, ids: &[AdId]) -> Vec<&AdRecord> {
        ids.iter()
            .map(|id| {
                self.get(*id).unwrap_or_else(|| {
                    panic!("FATAL: ad {} is in the interval index but not in the id map", id)
                })
            })
            .collect()
    }

    /// Looks up a single record.
    pub fn get(&self, id: AdId) -> Option<&AdRecord> {
        self.slots
            .get(&id)
            .and_then(|&slot| self.catalog.ad_content.get(slot))
    }

    /// The full catalog, unfiltered, for diagnostics.
    pub fn status(&self) -> &Catalog {
        &self.catalog
    }

    /// Version of the indexed catalog
    pub fn version(&self) -> i64 {
        self.catalog.version
    }

    /// Sorted interval entries
    pub fn entries(&self) -> &[IntervalEntry] {
        &self.entries
    }

    /// Number of indexed entries, one per catalog record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lower bound: first entry with `end_time >= current_time`.
    fn first_unexpired(&self, current_time: i64) -> usize {
        self.entries.partition_point(|e| e.end_time < current_time)
    }
}
