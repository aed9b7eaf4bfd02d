//! Reusable widgets for the TUI
//!
//! Renderers for the pieces a view draws onto a surface: metric cards,
//! charts and raw data tables.

pub mod chart;
pub mod data_table;
pub mod metric_card;

use ratatui::style::Color;

/// Brand green used for deltas, highlights and the card stripe
pub const ACCENT_GREEN: Color = Color::Rgb(0x28, 0xa7, 0x45);

pub use chart::{render_chart, tone_color};
pub use data_table::{render_table, table_height};
pub use metric_card::MetricCardWidget;
