//! Terminal UI: Elm-style event loop, records view and widgets.

pub mod app;
pub mod events;
pub mod layout;
pub mod services;
pub mod theme;
pub mod views;
pub mod widgets;
