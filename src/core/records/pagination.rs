//! Page-size selection and pagination arithmetic.
//!
//! Everything here is a pure function of `(page, count, size)`. The footer
//! widget uses these to decide which navigation actions are enabled and
//! what range label to show.

use std::fmt;

/// Rows shown per page in unfiltered mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    /// A fixed number of rows. Always positive.
    Rows(usize),
    /// No slicing; the whole list is shown.
    All,
}

/// Choices offered by the pagination footer, in display order.
pub const PAGE_SIZE_OPTIONS: [PageSize; 4] = [
    PageSize::Rows(5),
    PageSize::Rows(10),
    PageSize::Rows(25),
    PageSize::All,
];

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(5)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "{n}"),
            PageSize::All => f.write_str("All"),
        }
    }
}

impl PageSize {
    /// Next option after this one, wrapping. Sizes not in the option list
    /// restart from the first option.
    pub fn next_option(self) -> PageSize {
        match PAGE_SIZE_OPTIONS.iter().position(|&s| s == self) {
            Some(idx) => PAGE_SIZE_OPTIONS[(idx + 1) % PAGE_SIZE_OPTIONS.len()],
            None => PAGE_SIZE_OPTIONS[0],
        }
    }

    /// Previous option before this one, wrapping.
    pub fn prev_option(self) -> PageSize {
        let len = PAGE_SIZE_OPTIONS.len();
        match PAGE_SIZE_OPTIONS.iter().position(|&s| s == self) {
            Some(idx) => PAGE_SIZE_OPTIONS[(idx + len - 1) % len],
            None => PAGE_SIZE_OPTIONS[0],
        }
    }
}

/// Number of pages needed to show `count` rows. `All` is a single page.
pub fn page_count(count: usize, size: PageSize) -> usize {
    match size {
        PageSize::Rows(n) if n > 0 => count.div_ceil(n),
        _ => 1,
    }
}

/// Zero-based index of the last page (0 for an empty list).
pub fn last_page(count: usize, size: PageSize) -> usize {
    page_count(count, size).saturating_sub(1)
}

/// Whether the "first"/"previous" actions are enabled.
pub fn can_go_back(page: usize, size: PageSize) -> bool {
    size != PageSize::All && page > 0
}

/// Whether the "next"/"last" actions are enabled.
pub fn can_go_forward(page: usize, count: usize, size: PageSize) -> bool {
    match size {
        PageSize::Rows(n) if n > 0 => page.saturating_add(1) < page_count(count, size),
        _ => false,
    }
}

/// One-based `(from, to)` bounds of the rows on `page`, as shown in the
/// "from–to of count" footer label.
pub fn displayed_rows(page: usize, count: usize, size: PageSize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    match size {
        PageSize::Rows(n) => {
            let from = page.saturating_mul(n).saturating_add(1);
            let to = count.min(page.saturating_add(1).saturating_mul(n));
            (from, to)
        }
        PageSize::All => (1, count),
    }
}

/// Footer label, e.g. `6–7 of 7`.
pub fn range_label(page: usize, count: usize, size: PageSize) -> String {
    let (from, to) = displayed_rows(page, count, size);
    format!("{from}–{to} of {count}")
}
