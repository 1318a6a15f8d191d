//! Color theme for the dextable TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Palette ─────────────────────────────────────────────────────────────────

/// Slate blue: focused borders, header row.
pub const PRIMARY: Color = Color::Rgb(0x3B, 0x4C, 0xCA);
/// Light blue: key hints, active page-size choice.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x6C, 0x8E, 0xF5);
/// Dex red: brand badge, spinner, selected row marker.
pub const ACCENT: Color = Color::Rgb(0xE3, 0x35, 0x0D);
/// Header row background.
pub const HEADER_BG: Color = Color::Rgb(0x24, 0x2B, 0x33);

/// Base background.
pub const BG_BASE: Color = Color::Rgb(0x12, 0x14, 0x18);

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Disabled actions, unfocused borders.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

/// Derived total column.
pub const TOTAL: Color = Color::Rgb(0xFF, 0xCB, 0x05);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Table header cells.
pub fn header() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

/// Selected table row.
pub fn row_selected() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Enabled navigation action.
pub fn action_enabled() -> Style {
    Style::default()
        .fg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Disabled navigation action.
pub fn action_disabled() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Search mode badge.
pub fn search_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block, highlighted when `focused`.
pub fn block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { PRIMARY } else { TEXT_DIM };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}
