//! Property-based tests for pagination arithmetic and the page-size reset.

use proptest::prelude::*;

use crate::core::records::pagination::{
    can_go_back, can_go_forward, displayed_rows, last_page, page_count,
};
use crate::core::records::{page_slice, PageSize, Record, ViewState, PAGE_SIZE_OPTIONS};

fn arb_page_size() -> impl Strategy<Value = PageSize> {
    prop::sample::select(PAGE_SIZE_OPTIONS.to_vec())
}

proptest! {
    /// Property: changing the page size always returns to page 0
    #[test]
    fn prop_page_size_change_resets_page(page in any::<usize>(), size in arb_page_size()) {
        let mut state = ViewState::new();
        state.set_page(page);
        state.set_page_size(size);
        prop_assert_eq!(state.page(), 0);
        prop_assert_eq!(state.page_size(), size);
    }

    /// Property: forward navigation is enabled exactly when a later page exists
    #[test]
    fn prop_forward_enabled_iff_more_pages(
        count in 0usize..500,
        page in 0usize..60,
        size in 1usize..30,
    ) {
        let size = PageSize::Rows(size);
        prop_assert_eq!(can_go_forward(page, count, size), page < last_page(count, size));
        prop_assert_eq!(can_go_back(page, size), page > 0);
    }

    /// Property: the footer range matches the rows actually on the page
    #[test]
    fn prop_displayed_rows_match_slice(count in 1usize..200, size in 1usize..30) {
        let size = PageSize::Rows(size);
        let records: Vec<Record> = (0..count)
            .map(|i| Record::new(i as i64, format!("r{i}"), &["Normal"], [1; 6]))
            .collect();
        for page in 0..page_count(count, size) {
            let (from, to) = displayed_rows(page, count, size);
            prop_assert_eq!(to - from + 1, page_slice(&records, page, size).len());
        }
    }
}
