//! Sidebar view
//!
//! Shows the dashboard header, the view selector and the data notes

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::display::format::truncate;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::SidebarLayout;
use crate::tui::widgets::ACCENT_GREEN;
use crate::view::{View, ANALYST_NOTE, DATA_SOURCE_NOTE};

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_selector(frame, app, layout.selector);
    render_notes(frame, layout.notes);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" M-Pesa Dashboard ")
        .title_style(
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let subtitle = Paragraph::new(format!("FY2021-FY2025 · v{}", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(subtitle, area);
}

/// Render the "Go to:" radio list
fn render_selector(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        "Go to:",
        Style::default().fg(Color::Gray),
    )))];

    // Borders, radio and key hint take ten columns
    let label_width = (area.width as usize).saturating_sub(10);

    items.extend(View::ALL.iter().map(|view| {
        let selected = app.active_view == *view;
        let style = if selected {
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let radio = if selected { "(•)" } else { "( )" };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", radio), style),
            Span::styled(
                format!("[{}] ", view.index() + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(truncate(view.label(), label_width), style),
        ]))
    }));

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the data source and analyst notes
fn render_notes(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Data Source:", bold)),
        Line::from(DATA_SOURCE_NOTE),
        Line::from(""),
        Line::from(vec![
            Span::styled("Analyst Note: ", bold.fg(Color::Cyan)),
            Span::raw(ANALYST_NOTE),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let notes = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });

    frame.render_widget(notes, area);
}
