//! Root layout computation: search bar, table, pagination footer, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered search input.
pub const SEARCH_HEIGHT: u16 = 3;
/// Height of the pagination footer.
pub const FOOTER_HEIGHT: u16 = 1;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    pub search: Rect,
    pub table: Rect,
    pub footer: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

        AppLayout {
            search: rows[0],
            table: rows[1],
            footer: rows[2],
            status: rows[3],
        }
    }
}
