//! Table pagination footer.
//!
//! Bound to the full record count, the current page and the page size.
//! Shows the page-size selector, the "from–to of count" label and the
//! first/previous/next/last actions. Disabled actions are dimmed and
//! produce no event, which is the only place page bounds are enforced.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::records::pagination::{self, PageSize, PAGE_SIZE_OPTIONS};
use crate::tui::theme;

/// Events emitted back to the records controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    PageChange(usize),
    PageSizeChange(PageSize),
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    count: usize,
    page: usize,
    page_size: PageSize,
}

impl Pagination {
    pub fn new(count: usize, page: usize, page_size: PageSize) -> Self {
        Self {
            count,
            page,
            page_size,
        }
    }

    pub fn first(&self) -> Option<PaginationEvent> {
        self.back_enabled().then_some(PaginationEvent::PageChange(0))
    }

    pub fn prev(&self) -> Option<PaginationEvent> {
        self.back_enabled()
            .then(|| PaginationEvent::PageChange(self.page - 1))
    }

    pub fn next(&self) -> Option<PaginationEvent> {
        self.forward_enabled()
            .then(|| PaginationEvent::PageChange(self.page + 1))
    }

    pub fn last(&self) -> Option<PaginationEvent> {
        self.forward_enabled().then(|| {
            PaginationEvent::PageChange(pagination::last_page(self.count, self.page_size))
        })
    }

    fn back_enabled(&self) -> bool {
        pagination::can_go_back(self.page, self.page_size)
    }

    fn forward_enabled(&self) -> bool {
        pagination::can_go_forward(self.page, self.count, self.page_size)
    }

    /// Map a navigation key to an event. Keys for disabled actions map to
    /// `None`, as do keys this widget does not own.
    pub fn map_key(&self, key: &KeyEvent) -> Option<PaginationEvent> {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown) => {
                self.next()
            }
            (KeyModifiers::NONE, KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp) => {
                self.prev()
            }
            (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => self.first(),
            (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => self.last(),
            (KeyModifiers::NONE, KeyCode::Char('s')) => Some(PaginationEvent::PageSizeChange(
                self.page_size.next_option(),
            )),
            (KeyModifiers::SHIFT, KeyCode::Char('S')) => Some(PaginationEvent::PageSizeChange(
                self.page_size.prev_option(),
            )),
            _ => None,
        }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Rows per page: ", theme::muted())];
        for option in PAGE_SIZE_OPTIONS {
            let style = if option == self.page_size {
                theme::action_enabled()
            } else {
                theme::action_disabled()
            };
            spans.push(Span::styled(format!(" {option} "), style));
        }

        spans.push(Span::raw("   "));
        spans.push(Span::raw(pagination::range_label(
            self.page,
            self.count,
            self.page_size,
        )));
        spans.push(Span::raw("   "));

        let action = |label: &'static str, enabled: bool| {
            let style = if enabled {
                theme::action_enabled()
            } else {
                theme::action_disabled()
            };
            Span::styled(label, style)
        };
        spans.push(action(" |< ", self.back_enabled()));
        spans.push(action(" < ", self.back_enabled()));
        spans.push(action(" > ", self.forward_enabled()));
        spans.push(action(" >| ", self.forward_enabled()));
        spans.push(Span::raw(" "));

        Line::from(spans)
    }
}

impl Widget for Pagination {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_first_page_back_disabled() {
        let footer = Pagination::new(7, 0, PageSize::Rows(5));
        assert_eq!(footer.first(), None);
        assert_eq!(footer.prev(), None);
        assert_eq!(footer.next(), Some(PaginationEvent::PageChange(1)));
        assert_eq!(footer.last(), Some(PaginationEvent::PageChange(1)));
    }

    #[test]
    fn test_last_page_forward_disabled() {
        let footer = Pagination::new(7, 1, PageSize::Rows(5));
        assert_eq!(footer.next(), None);
        assert_eq!(footer.last(), None);
        assert_eq!(footer.prev(), Some(PaginationEvent::PageChange(0)));
    }

    #[test]
    fn test_all_disables_navigation() {
        let footer = Pagination::new(151, 0, PageSize::All);
        assert_eq!(footer.map_key(&press(KeyCode::Char('n'))), None);
        assert_eq!(footer.map_key(&press(KeyCode::Char('p'))), None);
    }

    #[test]
    fn test_page_size_keys_cycle() {
        let footer = Pagination::new(151, 3, PageSize::Rows(25));
        assert_eq!(
            footer.map_key(&press(KeyCode::Char('s'))),
            Some(PaginationEvent::PageSizeChange(PageSize::All))
        );
        assert_eq!(
            footer.map_key(&KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            Some(PaginationEvent::PageSizeChange(PageSize::Rows(10)))
        );
    }

    #[test]
    fn test_last_key_jumps_to_final_page() {
        let footer = Pagination::new(26, 0, PageSize::Rows(5));
        assert_eq!(
            footer.map_key(&press(KeyCode::End)),
            Some(PaginationEvent::PageChange(5))
        );
    }

    #[test]
    fn test_unowned_key_is_ignored() {
        let footer = Pagination::new(26, 0, PageSize::Rows(5));
        assert_eq!(footer.map_key(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_render_shows_range_label() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Pagination::new(7, 1, PageSize::Rows(5)).render(area, &mut buf);
        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("6–7 of 7"));
        assert!(rendered.contains("Rows per page:"));
    }
}
