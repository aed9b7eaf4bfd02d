//! Metric card widget
//!
//! A bordered box with a label, a large value and a green delta line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::ACCENT_GREEN;
use crate::surface::MetricCard;

/// Widget for rendering a metric card
pub struct MetricCardWidget<'a> {
    card: &'a MetricCard,
}

impl<'a> MetricCardWidget<'a> {
    pub fn new(card: &'a MetricCard) -> Self {
        Self { card }
    }
}

impl<'a> Widget for MetricCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                self.card.label.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.card.value.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.card.delta.as_str(),
                Style::default()
                    .fg(ACCENT_GREEN)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);

        // Accent stripe down the left edge
        if area.height > 2 {
            for y in area.y + 1..area.y + area.height - 1 {
                buf[(area.x, y)].set_symbol("┃").set_style(Style::default().fg(ACCENT_GREEN));
            }
        }
    }
}
