//! User interfaces (CLI, TUI)

pub mod cli;
pub mod tui;
