//! Single-line search field with cursor management.
//!
//! The cursor is a byte offset that always sits on a char boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

/// Glyph shown before the query text.
const ADORNMENT: &str = "⌕ ";

#[derive(Debug, Default)]
pub struct SearchInput {
    content: String,
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns true when the text changed.
    ///
    /// Cursor-only moves return false.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                let changed = !self.content.is_empty();
                self.clear();
                changed
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert_char(c);
                true
            }
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => {
                self.move_left();
                false
            }
            (_, KeyCode::Right) => {
                self.move_right();
                false
            }
            (_, KeyCode::Home) => {
                self.cursor = 0;
                false
            }
            (_, KeyCode::End) => {
                self.cursor = self.content.len();
                false
            }
            _ => false,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.content.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        let next = self.next_boundary();
        self.content.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.content.len())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = theme::block("Search", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = if self.content.is_empty() && !focused {
            Line::from(vec![
                Span::styled(ADORNMENT, theme::muted()),
                Span::styled("press / to search by name", theme::key_hint()),
            ])
        } else {
            Line::from(vec![
                Span::styled(ADORNMENT, theme::muted()),
                Span::raw(self.content.clone()),
            ])
        };
        frame.render_widget(Paragraph::new(line), inner);

        if focused {
            let before_cursor = self.content[..self.cursor].chars().count() as u16;
            let x = inner.x + ADORNMENT.chars().count() as u16 + before_cursor;
            frame.set_cursor_position(Position::new(
                x.min(inner.right().saturating_sub(1)),
                inner.y,
            ));
        }
    }
}
