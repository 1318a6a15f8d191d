//! Records view: searchable, paginated creature table.
//!
//! Body modes, in priority order: a spinner row while the fetch is in
//! flight; every match when the search text is non-empty (pagination is
//! ignored); otherwise one page of the full list. The footer always
//! reflects the full list.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::core::records::{Record, RecordsController, TableBody};
use crate::tui::events::InputFocus;
use crate::tui::layout::AppLayout;
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::{Pagination, PaginationEvent, SearchInput};

/// Column labels, in display order.
pub const COLUMNS: [&str; 10] = [
    "ID", "Name", "Type", "HP", "Attack", "Defense", "Sp. Atk", "Sp. Def", "Speed", "Total",
];

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Shown in the total column when an attribute is missing.
const MISSING_TOTAL: &str = "NaN";

// ── State ──────────────────────────────────────────────────────────────────

pub struct RecordsViewState {
    controller: RecordsController,
    search: SearchInput,
    focus: InputFocus,
    table_state: TableState,
    spinner_frame: usize,
}

impl Default for RecordsViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsViewState {
    pub fn new() -> Self {
        Self {
            controller: RecordsController::new(),
            search: SearchInput::new(),
            focus: InputFocus::Table,
            table_state: TableState::default(),
            spinner_frame: 0,
        }
    }

    /// Kick off the one-time record fetch.
    pub fn load(&mut self, services: &Services) {
        self.controller.start(services.source.clone());
    }

    pub fn poll(&mut self) {
        if self.controller.poll() {
            self.table_state = TableState::default();
        }
    }

    pub fn on_tick(&mut self) {
        if self.controller.state().is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }

    pub fn controller(&self) -> &RecordsController {
        &self.controller
    }

    pub fn input_focus(&self) -> InputFocus {
        self.focus
    }

    pub fn focus_search(&mut self) {
        self.focus = InputFocus::Search;
    }

    fn pagination(&self) -> Pagination {
        let state = self.controller.state();
        Pagination::new(state.records().len(), state.page(), state.page_size())
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match self.focus {
            InputFocus::Search => self.handle_search_key(key),
            InputFocus::Table => self.handle_table_key(key),
        }
    }

    fn handle_search_key(&mut self, key: &KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => false,
            (_, KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab) => {
                self.focus = InputFocus::Table;
                true
            }
            _ => {
                if self.search.handle_key(key) {
                    self.on_query_edited();
                }
                true
            }
        }
    }

    fn handle_table_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(event) = self.pagination().map_key(key) {
            self.apply_pagination(event);
            return true;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('/'))
            | (KeyModifiers::NONE, KeyCode::Char('i')) => {
                self.focus = InputFocus::Search;
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) if !self.search.text().is_empty() => {
                self.search.clear();
                self.on_query_edited();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                let rows = self.controller.body().rows().len();
                if rows > 0 {
                    let next = self.table_state.selected().map_or(0, |i| (i + 1).min(rows - 1));
                    self.table_state.select(Some(next));
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                if let Some(i) = self.table_state.selected() {
                    self.table_state.select(Some(i.saturating_sub(1)));
                }
                true
            }
            _ => false,
        }
    }

    fn on_query_edited(&mut self) {
        self.controller.on_query_change(self.search.text());
        self.table_state = TableState::default();
    }

    fn apply_pagination(&mut self, event: PaginationEvent) {
        match event {
            PaginationEvent::PageChange(page) => self.controller.on_page_change(page),
            PaginationEvent::PageSizeChange(size) => self.controller.on_page_size_change(size),
        }
        self.table_state = TableState::default();
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame, layout: &AppLayout) {
        self.search
            .render(frame, layout.search, self.focus == InputFocus::Search);
        self.render_table(frame, layout.table);
        frame.render_widget(self.pagination(), layout.footer);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let body = self.controller.body();
        let title = match &body {
            TableBody::Filtered(rows) => format!("Creatures ({} matches)", rows.len()),
            _ => "Creatures".to_string(),
        };
        let block = theme::block(&title, self.focus == InputFocus::Table);
        let inner = block.inner(area);

        let loading = matches!(body, TableBody::Loading);
        let visible = body.rows();
        let id_width = visible
            .iter()
            .filter_map(|r| r.id.as_ref().map(|id| id.to_string().chars().count()))
            .max()
            .unwrap_or(0)
            .clamp(2, 24) as u16;
        let rows: Vec<Row<'static>> = visible.into_iter().map(record_row).collect();

        if let Some(selected) = self.table_state.selected() {
            if rows.is_empty() {
                self.table_state.select(None);
            } else if selected >= rows.len() {
                self.table_state.select(Some(rows.len() - 1));
            }
        }

        let header = Row::new(COLUMNS.iter().map(|h| Cell::from(Line::from(*h).centered())))
            .style(theme::header())
            .height(1);

        let table = Table::new(rows, column_widths(id_width))
            .header(header)
            .block(block)
            .row_highlight_style(theme::row_selected())
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);

        if loading && inner.height > 1 {
            let spinner_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let line = Line::from(vec![
                Span::styled(SPINNER[self.spinner_frame], Style::default().fg(theme::ACCENT)),
                Span::styled(" Loading…", theme::muted()),
            ])
            .centered();
            frame.render_widget(Paragraph::new(line), spinner_row);
        }
    }
}

fn column_widths(id_width: u16) -> Vec<Constraint> {
    let mut widths = vec![
        Constraint::Length(id_width),
        Constraint::Min(12),
        Constraint::Min(16),
    ];
    widths.extend(
        COLUMNS[3..]
            .iter()
            .map(|label| Constraint::Length(label.chars().count().max(5) as u16)),
    );
    widths
}

/// Display text for a record's total.
pub fn total_label(record: &Record) -> String {
    record
        .total()
        .map(|t| t.to_string())
        .unwrap_or_else(|| MISSING_TOTAL.to_string())
}

fn centered(text: String) -> Cell<'static> {
    Cell::from(Line::from(text).centered())
}

fn record_row(record: &Record) -> Row<'static> {
    let mut cells = vec![
        centered(record.id.as_ref().map(ToString::to_string).unwrap_or_default()),
        centered(record.name.clone()),
        centered(record.categories_label()),
    ];
    cells.extend(
        record
            .attributes()
            .into_iter()
            .map(|v| centered(v.map(|v| v.to_string()).unwrap_or_default())),
    );
    cells.push(
        Cell::from(Line::from(total_label(record)).centered())
            .style(Style::default().fg(theme::TOTAL)),
    );
    Row::new(cells)
}

// ── Tests ──────────────────────────────────────────────────────────────────
