/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the global key mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowHelp,
    CloseHelp,
    FocusSearch,
    Quit,
}

/// Which part of the records view receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// Keys edit the search text.
    Search,
    /// Keys navigate rows and pages.
    #[default]
    Table,
}

impl InputFocus {
    pub fn label(self) -> &'static str {
        match self {
            InputFocus::Search => "SEARCH",
            InputFocus::Table => "TABLE",
        }
    }
}
