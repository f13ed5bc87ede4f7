//! Index Determinism Tests
//!
//! Tests for interval index invariants:
//! - One entry per catalog record
//! - Search results are deterministic and idempotent
//! - Window bounds are inclusive at both ends
//! - `all_active` results are a superset of regular results
//! - Lookups return records unmodified

use adserver::catalog::{AdId, AdRecord, Catalog, DisplayWindow};
use adserver::index::IntervalIndex;
use proptest::prelude::*;

// =============================================================================
// Helper Functions
// =============================================================================

fn ad(id: AdId, start: i64, end: i64) -> AdRecord {
    AdRecord::new(id, format!("img_url_{}", id), DisplayWindow::new(start, end))
}

fn build(ads: Vec<AdRecord>) -> IntervalIndex {
    IntervalIndex::build(Catalog::new(1, 0, ads))
}

fn sorted(mut ids: Vec<AdId>) -> Vec<AdId> {
    ids.sort();
    ids
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Six overlapping windows queried at every interesting instant.
#[test]
fn test_reference_scenario() {
    let index = build(vec![
        ad(1, 10, 10),
        ad(2, 10, 20),
        ad(3, 40, 100),
        ad(4, 50, 90),
        ad(5, 1, 5),
        ad(6, 5, 9),
    ]);

    assert_eq!(sorted(index.search_active(10, false)), vec![1, 2]);
    assert_eq!(sorted(index.search_active(20, false)), vec![2]);
    assert_eq!(sorted(index.search_active(60, false)), vec![3, 4]);
    assert_eq!(sorted(index.search_active(2, false)), vec![5]);
    assert_eq!(sorted(index.search_active(5, false)), vec![5, 6]);
    assert_eq!(sorted(index.search_active(30, false)), Vec::<AdId>::new());
    assert_eq!(sorted(index.search_active(2, true)), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(sorted(index.search_active(10, true)), vec![1, 2, 3, 4]);
}

/// Ads sharing an end time are returned in id order.
#[test]
fn test_tie_on_end_time_ordered_by_id() {
    let index = build(vec![ad(30, 0, 100), ad(10, 50, 100), ad(20, 25, 100)]);
    assert_eq!(index.search_active(60, false), vec![10, 20, 30]);
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Building twice from the same catalog yields identical entries.
#[test]
fn test_build_is_deterministic() {
    let ads = vec![ad(3, 0, 9), ad(1, 4, 9), ad(2, 2, 5)];
    let a = build(ads.clone());
    let b = build(ads);
    assert_eq!(a.entries(), b.entries());
}

/// Repeated queries return the same answer.
#[test]
fn test_search_is_idempotent() {
    let index = build(vec![ad(1, 0, 10), ad(2, 5, 15), ad(3, 8, 8)]);
    let first = index.search_active(8, false);
    for _ in 0..100 {
        assert_eq!(index.search_active(8, false), first);
    }
}

// =============================================================================
// Lookup Tests
// =============================================================================

/// `get_by_ids` returns the catalog records themselves.
#[test]
fn test_get_by_ids_returns_records_unmodified() {
    let ads = vec![ad(1, 0, 10), ad(2, 5, 15)];
    let index = build(ads.clone());

    let ids = index.search_active(7, false);
    let records = index.get_by_ids(&ids);
    assert_eq!(records, vec![&ads[0], &ads[1]]);
}

/// Every catalog record gets exactly one entry.
#[test]
fn test_index_size_matches_catalog() {
    let ads: Vec<AdRecord> = (0..50).map(|i| ad(i, i * 3, i * 3 + 7)).collect();
    let index = build(ads);
    assert_eq!(index.len(), 50);
    assert_eq!(index.status().len(), 50);
}

// =============================================================================
// Property Tests
// =============================================================================

fn arb_windows() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-1_000i64..1_000, 0i64..500), 0..40)
        .prop_map(|v| v.into_iter().map(|(start, len)| (start, start + len)).collect())
}

fn index_from(windows: &[(i64, i64)]) -> IntervalIndex {
    build(
        windows
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| ad(i as AdId, start, end))
            .collect(),
    )
}

proptest! {
    /// Regular results are exactly the ads whose window contains `t`.
    #[test]
    fn prop_search_matches_linear_scan(windows in arb_windows(), t in -1_200i64..1_600) {
        let index = index_from(&windows);
        let expected: Vec<AdId> = windows
            .iter()
            .enumerate()
            .filter(|(_, window)| DisplayWindow::new(window.0, window.1).contains(t))
            .map(|(i, _)| i as AdId)
            .collect();
        prop_assert_eq!(sorted(index.search_active(t, false)), expected);
    }

    /// `all_active` returns exactly the unexpired ads, a superset of regular results.
    #[test]
    fn prop_all_active_is_superset(windows in arb_windows(), t in -1_200i64..1_600) {
        let index = index_from(&windows);
        let active = index.search_active(t, false);
        let unexpired = index.search_active(t, true);

        for id in &active {
            prop_assert!(unexpired.contains(id));
        }
        let expected = windows.iter().filter(|&&(_, end)| end >= t).count();
        prop_assert_eq!(unexpired.len(), expected);
    }

    /// Entries stay sorted by `(end_time, id)`.
    #[test]
    fn prop_entries_sorted(windows in arb_windows()) {
        let index = index_from(&windows);
        prop_assert_eq!(index.len(), windows.len());
        for pair in index.entries().windows(2) {
            prop_assert!((pair[0].end_time, pair[0].id) <= (pair[1].end_time, pair[1].id));
        }
    }
}
