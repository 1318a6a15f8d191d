//! In-memory view state for the record table.

use super::model::Record;
use super::pagination::PageSize;

/// Everything the table view needs to render, owned by one controller.
///
/// Mutated only through the `set_*` transitions below.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    records: Vec<Record>,
    loading: bool,
    query: String,
    page: usize,
    page_size: PageSize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Replace the whole list. The page index is left alone.
    pub fn set_list(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the search text. The page index is left alone.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set the page verbatim; no bounds check.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Set the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }
}
