//! Terminal User Interface (TUI) module
//!
//! Interactive list screen over the object bucket: load on startup, create
//! with a keypress, delete behind a confirmation popup.

use std::io;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and load the user's objects, as on screen activation
    let mut app = App::new().await?;
    app.refresh_objects().await;
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
///
/// Operations are awaited inline, so exactly one request is in flight at a
/// time and every list mutation happens between two frames.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events
        if let Event::Key(key) = event::read()? {
            let should_exit = event_handler::handle_key_event(app, key.code).await?;

            if should_exit {
                return Ok(());
            }
        }
    }
}
