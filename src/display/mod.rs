//! Display formatting for terminal output
//!
//! Number formatting shared by every surface, plus the plain-text surface
//! used by the `show` command.

pub mod format;
pub mod text;

pub use text::TextSurface;
