//! TUI Views module
//!
//! The dashboard page plus the sidebar and status bar around it.

pub mod page;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area(), app.settings.sidebar_width);

    sidebar::render(frame, app, layout.sidebar);
    page::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::Datasets;
    use crate::view::View;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_every_view_draws_its_heading() {
        let data = Datasets::build();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        for view in View::ALL {
            app.switch_view(view);
            let text = screen(&mut app);
            assert!(text.contains(view.title()), "missing heading for {}", view);
            assert!(text.contains("M-Pesa Dashboard"));
        }
    }

    #[test]
    fn test_executive_cards_on_screen() {
        let data = Datasets::build();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        let text = screen(&mut app);
        assert!(text.contains("KES 161.1B"));
        assert!(text.contains("(•)"));
    }

    #[test]
    fn test_merchant_data_table_toggle() {
        let data = Datasets::build();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);
        app.switch_view(View::MerchantEcosystem);

        let collapsed = screen(&mut app);
        assert!(collapsed.contains("(d to expand)"));
        assert!(!collapsed.contains("LNM_Active_Merchants"));

        app.toggle_data();
        let expanded = screen(&mut app);
        assert!(expanded.contains("LNM_Active_Merchants"));
        assert!(expanded.contains("606660"));
    }

    #[test]
    fn test_help_overlay_lists_keys() {
        let data = Datasets::build();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);
        app.toggle_help();

        let text = screen(&mut app);
        assert!(text.contains("Global Keys"));
        assert!(text.contains("Switch panel focus"));
    }
}
