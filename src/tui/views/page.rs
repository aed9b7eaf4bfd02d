//! Dashboard page view
//!
//! Draws whatever the active view emitted onto its `PageLayout`: heading,
//! metric cards, charts, the insight box and the underlying data table.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::surface::TableSpec;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{chart_columns, columns, PageSections};
use crate::tui::widgets::{render_chart, render_table, table_height, MetricCardWidget, ACCENT_GREEN};
use crate::view::View;

/// Render the active view into the main panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.current_page();
    let view = app.active_view;

    let cards = page.cards();
    let charts = page.charts();
    let tables = page.tables();

    let sections = PageSections::new(
        area,
        !cards.is_empty(),
        view.insight().is_some(),
        data_height(tables.first().copied(), app.show_data),
    );

    render_header(frame, view, app.focused_panel == FocusedPanel::Main, sections.header);

    for (card, rect) in cards.iter().zip(columns(sections.cards, cards.len())) {
        frame.render_widget(MetricCardWidget::new(card), rect);
    }

    for (spec, rect) in charts
        .iter()
        .zip(chart_columns(sections.charts, view, charts.len()))
    {
        render_chart(frame, rect, spec, app.cursor);
    }

    if let Some(text) = view.insight() {
        render_insight(frame, text, sections.insight);
    }

    if let Some(table) = tables.first() {
        if app.show_data {
            render_table(frame, sections.data, table);
        } else {
            render_collapsed(frame, &table.title, sections.data);
        }
    }
}

/// Rows reserved for the data section: the full table or a one-line toggle
fn data_height(table: Option<&TableSpec>, expanded: bool) -> u16 {
    match table {
        Some(table) if expanded => table_height(table),
        Some(_) => 1,
        None => 0,
    }
}

fn render_header(frame: &mut Frame, view: View, is_focused: bool, area: Rect) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let tagline = Paragraph::new(view.tagline())
        .block(block)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });

    frame.render_widget(tagline, area);
}

fn render_insight(frame: &mut Frame, text: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_GREEN));

    let insight = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    frame.render_widget(insight, area);
}

fn render_collapsed(frame: &mut Frame, title: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!("▸ {}", title), Style::default().fg(Color::White)),
        Span::styled(" (d to expand)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
