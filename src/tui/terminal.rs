//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::data;
use crate::error::DashboardError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings) -> Result<()> {
    let datasets = data::load();

    let mut terminal = init_terminal()?;
    tracing::info!(view = %crate::view::View::default(), "Dashboard started");

    let result = event_loop(&mut terminal, datasets, settings);
    let restored = restore_terminal();
    tracing::info!("Dashboard closed");

    finish(result, restored)
}

/// Combine the event loop outcome with the terminal restore
///
/// A loop error takes precedence; a restore failure is always logged so it
/// is not lost behind it.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        tracing::error!(error = %e, "Failed to restore terminal");
    }
    result.and(restored)
}

fn event_loop(terminal: &mut Tui, datasets: &data::Datasets, settings: &Settings) -> Result<()> {
    let mut app = App::new(datasets, settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        let event = events
            .next()
            .map_err(|e| DashboardError::Tui(format!("Terminal event stream closed: {}", e)))?;
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_loop_error_survives_restore_failure() {
        let err = finish(Err(anyhow!("event stream closed")), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "event stream closed");
    }

    #[test]
    fn test_restore_failure_reported_after_clean_loop() {
        let err = finish(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
