//! Property-based tests for record filtering, paging and totals.
//!
//! Tests invariants:
//! - Filtered output is exactly the case-folded substring matches, in order
//! - A page is the clipped slice `L[p*s .. p*s+s]`
//! - `All` returns the list unsliced regardless of page
//! - Totals equal the literal sum of the six attributes

use proptest::prelude::*;

use crate::core::records::{filter_records, page_slice, PageSize, Record};

// ============================================================================
// Strategies
// ============================================================================

fn arb_record() -> impl Strategy<Value = Record> {
    (
        0i64..10_000,
        "[A-Za-z][a-z]{0,11}",
        prop::collection::vec("[A-Z][a-z]{2,8}", 1..3),
        prop::array::uniform6(0u32..=255),
    )
        .prop_map(|(id, name, categories, attributes)| {
            let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
            Record::new(id, name, &categories, attributes)
        })
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..40)
}

fn arb_query() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,3}"
}

proptest! {
    /// Property: filtering keeps exactly the matching records, in original order
    #[test]
    fn prop_filter_is_ordered_subset(records in arb_records(), query in arb_query()) {
        let filtered = filter_records(&records, &query);
        let needle = query.to_lowercase();
        let expected: Vec<&Record> = records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    /// Property: the filter does not depend on query case
    #[test]
    fn prop_filter_case_insensitive(records in arb_records(), query in arb_query()) {
        let lower = filter_records(&records, &query.to_lowercase());
        let upper = filter_records(&records, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Property: a page is the clipped slice and empty past the end
    #[test]
    fn prop_page_is_clipped_slice(
        records in arb_records(),
        page in 0usize..20,
        size in 1usize..30,
    ) {
        let slice = page_slice(&records, page, PageSize::Rows(size));
        let start = page * size;
        if start >= records.len() {
            prop_assert!(slice.is_empty());
        } else {
            let end = (start + size).min(records.len());
            prop_assert_eq!(slice, &records[start..end]);
        }
    }

    /// Property: `All` ignores the page index
    #[test]
    fn prop_page_size_all_is_unsliced(records in arb_records(), page in 0usize..1000) {
        prop_assert_eq!(page_slice(&records, page, PageSize::All), records.as_slice());
    }

    /// Property: pages of a fixed size tile the list without gaps or overlap
    #[test]
    fn prop_pages_tile_list(records in arb_records(), size in 1usize..10) {
        let pages = records.len().div_ceil(size);
        let rejoined: Vec<Record> = (0..pages)
            .flat_map(|p| page_slice(&records, p, PageSize::Rows(size)).to_vec())
            .collect();
        prop_assert_eq!(rejoined, records);
    }

    /// Property: total is the literal sum and is stable across calls
    #[test]
    fn prop_total_is_sum(record in arb_record()) {
        let expected: f64 = record.attributes().iter().map(|v| v.unwrap_or_default()).sum();
        prop_assert_eq!(record.total(), Some(expected));
        prop_assert_eq!(record.total(), record.total());
    }
}
