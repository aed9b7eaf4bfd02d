//! Raw data table widget

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::surface::TableSpec;

/// Height needed to show `spec` in full: borders, header and one line per row
pub fn table_height(spec: &TableSpec) -> u16 {
    spec.rows.len() as u16 + 3
}

/// Render a `TableSpec` as a bordered ratatui table
pub fn render_table(frame: &mut Frame, area: Rect, spec: &TableSpec) {
    let block = Block::default()
        .title(format!(" {} ", spec.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let widths: Vec<Constraint> = spec
        .headers
        .iter()
        .map(|h| Constraint::Min(h.chars().count() as u16 + 2))
        .collect();

    let header = Row::new(
        spec.headers
            .iter()
            .map(|h| Cell::from(h.clone()).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = spec
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|c| Cell::from(c.clone()))))
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MerchantMetrics;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_merchant_table_renders_raw_counts() {
        let spec = TableSpec::merchant_raw("View Underlying Data", &MerchantMetrics::build());
        assert_eq!(table_height(&spec), 6);

        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal
            .draw(|frame| render_table(frame, frame.area(), &spec))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Pochi_Active_Tills"));
        assert!(text.contains("292634"));
        assert!(text.contains("2025 (HY)"));
        assert!(text.contains("658700"));
    }
}
