//! Terminal User Interface module
//!
//! The interactive dashboard: a sidebar selector for the three views and a
//! main panel that draws the selected view's cards, charts and tables with
//! ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
