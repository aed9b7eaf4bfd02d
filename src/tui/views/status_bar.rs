//! Status bar view
//!
//! Shows the active view, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::ACCENT_GREEN;
use crate::view::View;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" View: ", Style::default().fg(Color::White)),
        Span::styled(
            app.active_view.label(),
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(category) = cursor_category(app) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(category, Style::default().fg(Color::Cyan)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  1-3:View  d:Data ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Fiscal year under the chart cursor, flagged when it isn't full-year actuals
fn cursor_category(app: &App) -> Option<String> {
    let year = match app.active_view {
        View::MerchantEcosystem => app.data.merchant.rows().get(app.cursor)?.fiscal_year,
        _ => app.data.financial.rows().get(app.cursor)?.fiscal_year,
    };

    Some(match year.basis() {
        Some(basis) => format!("FY {} · {}", year, basis),
        None => format!("FY {}", year),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::Datasets;

    #[test]
    fn test_cursor_year_carries_basis() {
        let data = Datasets::build();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        assert_eq!(
            cursor_category(&app).as_deref(),
            Some("FY 2025 (Proj) · analyst projection")
        );

        app.cursor_left();
        assert_eq!(cursor_category(&app).as_deref(), Some("FY 2024"));

        app.switch_view(View::MerchantEcosystem);
        assert_eq!(
            cursor_category(&app).as_deref(),
            Some("FY 2025 (HY) · half-year actuals")
        );
    }
}
