//! dextable - searchable, paginated creature table for the terminal.
//!
//! Fetches a static list of creature records once at start-up, then
//! filters by name and paginates entirely in memory.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
