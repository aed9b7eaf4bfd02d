//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the data and rendering layers.

pub mod export;
pub mod show;

pub use export::{handle_export_command, ExportArgs};
pub use show::{handle_show_command, ShowArgs};
