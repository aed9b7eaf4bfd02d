//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar,
//! and the stacked sections of a dashboard page.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::view::View;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (view selector and notes)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, sidebar_width: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(40)])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// View selector
    pub selector: Rect,
    /// Data source and analyst notes
    pub notes: Rect,
}

impl SidebarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(7), // Selector
                Constraint::Min(4),    // Notes
            ])
            .split(area);

        Self {
            header: chunks[0],
            selector: chunks[1],
            notes: chunks[2],
        }
    }
}

/// Stacked sections of a dashboard page
///
/// Sections a view doesn't use get zero height.
pub struct PageSections {
    pub header: Rect,
    pub cards: Rect,
    pub charts: Rect,
    pub insight: Rect,
    pub data: Rect,
}

impl PageSections {
    pub fn new(area: Rect, has_cards: bool, has_insight: bool, data_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(if has_cards { 5 } else { 0 }),
                Constraint::Min(8),
                Constraint::Length(if has_insight { 5 } else { 0 }),
                Constraint::Length(data_height),
            ])
            .split(area);

        Self {
            header: chunks[0],
            cards: chunks[1],
            charts: chunks[2],
            insight: chunks[3],
            data: chunks[4],
        }
    }
}

/// Split a row evenly into `count` columns
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Split the chart row for a view
///
/// The executive page gives revenue twice the width of active users; other
/// pages share the row evenly.
pub fn chart_columns(area: Rect, view: View, count: usize) -> Vec<Rect> {
    if view == View::ExecutiveSummary && count == 2 {
        return Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(area)
            .to_vec();
    }
    columns(area, count)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
