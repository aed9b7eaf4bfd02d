//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The only dashboard state is the selected view; everything on screen is
//! re-rendered from the cached datasets each frame.

use crate::config::settings::Settings;
use crate::data::Datasets;
use crate::surface::PageLayout;
use crate::view::{self, View};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Main application state
pub struct App<'a> {
    /// The static tables being displayed
    pub data: &'a Datasets,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently selected view
    pub active_view: View,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Whether the "View Underlying Data" table is expanded
    pub show_data: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Category under the chart cursor, for unified readouts
    pub cursor: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance, starting on the default view
    pub fn new(data: &'a Datasets, settings: &'a Settings) -> Self {
        Self {
            data,
            settings,
            should_quit: false,
            active_view: View::default(),
            focused_panel: FocusedPanel::default(),
            show_data: false,
            show_help: false,
            cursor: data.financial.len().saturating_sub(1),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: View) {
        if self.active_view == view {
            return;
        }
        tracing::info!(from = self.active_view.label(), to = view.label(), "Switching view");
        self.active_view = view;
        self.show_data = false;
        self.cursor = self.category_count().saturating_sub(1);
        self.clear_status();
    }

    /// Select the next view in the sidebar
    pub fn next_view(&mut self) {
        self.switch_view(self.active_view.next());
    }

    /// Select the previous view in the sidebar
    pub fn prev_view(&mut self) {
        self.switch_view(self.active_view.prev());
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Expand or collapse the underlying data table
    pub fn toggle_data(&mut self) {
        if self.active_view != View::MerchantEcosystem {
            self.set_status("No underlying data table on this view");
            return;
        }
        self.show_data = !self.show_data;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Number of x categories in the active view's charts
    pub fn category_count(&self) -> usize {
        match self.active_view {
            View::MerchantEcosystem => self.data.merchant.len(),
            _ => self.data.financial.len(),
        }
    }

    /// Move the chart cursor one category left
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the chart cursor one category right
    pub fn cursor_right(&mut self) {
        let last = self.category_count().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Render the active view into a fresh page layout
    pub fn current_page(&self) -> PageLayout {
        let mut page = PageLayout::new();
        view::route(self.active_view, self.data, &mut page);
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Datasets, Settings) {
        (Datasets::build(), Settings::default())
    }

    #[test]
    fn test_starts_on_executive_summary() {
        let (data, settings) = fixture();
        let app = App::new(&data, &settings);
        assert_eq!(app.active_view, View::ExecutiveSummary);
        assert!(!app.show_data);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn test_switch_view_resets_view_state() {
        let (data, settings) = fixture();
        let mut app = App::new(&data, &settings);

        app.switch_view(View::MerchantEcosystem);
        app.toggle_data();
        assert!(app.show_data);
        assert_eq!(app.cursor, 2);

        app.switch_view(View::UsageVelocity);
        assert!(!app.show_data);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn test_toggle_data_only_on_merchant_view() {
        let (data, settings) = fixture();
        let mut app = App::new(&data, &settings);

        app.toggle_data();
        assert!(!app.show_data);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let (data, settings) = fixture();
        let mut app = App::new(&data, &settings);
        app.switch_view(View::MerchantEcosystem);

        app.cursor_right();
        assert_eq!(app.cursor, 2);
        for _ in 0..5 {
            app.cursor_left();
        }
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_current_page_follows_selection() {
        let (data, settings) = fixture();
        let mut app = App::new(&data, &settings);

        assert_eq!(app.current_page().cards().len(), 4);
        app.next_view();
        assert_eq!(app.current_page().cards().len(), 0);
        app.next_view();
        assert_eq!(app.current_page().tables().len(), 1);
    }
}
