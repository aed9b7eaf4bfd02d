//! Dialog modules for the TUI
//!
//! Modal overlays drawn above the dashboard

pub mod help;
