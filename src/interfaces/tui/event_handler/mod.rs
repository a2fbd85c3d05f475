//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the handler for the current
//! screen:
//! - object_screens: Main, DeleteConfirm
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod misc_screens;
mod object_screens;

use misc_screens::*;
use object_screens::*;

/// Handle keyboard input based on current screen
pub async fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code).await,
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code).await,
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
