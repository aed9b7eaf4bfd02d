//! Plain-text surface for terminal output
//!
//! Used by `mpesa-dash show`. Charts become one row per category with a
//! glyph bar per series; tables go through `tabled`.

use tabled::builder::Builder;
use tabled::settings::Style;

use super::format::{double_separator, format_bar, format_label};
use crate::surface::{
    AxisSide, ChartSpec, HoverMode, LabelFormat, MetricCard, Surface, TableSpec,
};

/// Width of the glyph bars drawn for chart values
const BAR_WIDTH: usize = 20;

/// A surface that accumulates plain text
#[derive(Debug, Default)]
pub struct TextSurface {
    output: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a free-form line (headings, commentary)
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Surface for TextSurface {
    fn metric_card(&mut self, card: &MetricCard) {
        self.line(format!(
            "  {:<28} {:>14}   {}",
            card.label, card.value, card.delta
        ));
    }

    fn chart(&mut self, chart: &ChartSpec) {
        self.line("");
        self.line(&chart.title);
        self.line(double_separator(chart.title.chars().count()));

        let mut axes = Vec::new();
        if let Some(x) = &chart.x_title {
            axes.push(format!("x: {}", x));
        }
        if let Some(y) = &chart.y_title {
            axes.push(format!("y: {}", y));
        }
        if let Some(y2) = &chart.y2_title {
            axes.push(format!("y2: {}", y2));
        }
        if !axes.is_empty() {
            self.line(axes.join("  |  "));
        }

        let mut builder = Builder::default();
        let mut header = vec!["Fiscal Year".to_string()];
        header.extend(chart.series.iter().map(|s| s.name.clone()));
        builder.push_record(header);

        for (i, category) in chart.categories.iter().enumerate() {
            let mut record = vec![category.clone()];
            for series in &chart.series {
                let value = series.values.get(i).copied().unwrap_or_default();
                // Right-axis series are scaled independently
                let max = chart.axis_max(series.axis);
                let label = format_label(value, series.labels.unwrap_or(LabelFormat::Auto));
                record.push(format!("{:>8} {}", label, format_bar(value, max, BAR_WIDTH)));
            }
            builder.push_record(record);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        self.line(table.to_string());

        for note in &chart.annotations {
            self.line(format!("  ↳ {}: {}", note.category, note.text));
        }
        if chart.hover == HoverMode::XUnified && chart.has_secondary_axis() {
            let right: Vec<_> = chart
                .series
                .iter()
                .filter(|s| s.axis == AxisSide::Right)
                .map(|s| s.name.as_str())
                .collect();
            self.line(format!("  (right axis: {})", right.join(", ")));
        }
    }

    fn table(&mut self, table: &TableSpec) {
        self.line("");
        self.line(&table.title);

        let mut builder = Builder::default();
        builder.push_record(table.headers.clone());
        for row in &table.rows {
            builder.push_record(row.clone());
        }

        let mut rendered = builder.build();
        rendered.with(Style::rounded());
        self.line(rendered.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Datasets;
    use crate::view::{route, View};

    #[test]
    fn test_metric_card_line() {
        let mut surface = TextSurface::new();
        surface.metric_card(&MetricCard::new("Total Txn Value", "KES 43.5 Trn", "↑ 8.1% YoY"));
        let text = surface.into_string();
        assert!(text.contains("Total Txn Value"));
        assert!(text.contains("KES 43.5 Trn"));
        assert!(text.contains("↑ 8.1% YoY"));
    }

    #[test]
    fn test_merchant_view_text() {
        let mut surface = TextSurface::new();
        route(View::MerchantEcosystem, &Datasets::build(), &mut surface);
        let text = surface.into_string();

        assert!(text.contains("↑ 37.4% vs FY24"));
        assert!(text.contains("870k"));
        assert!(text.contains("Pochi (Informal)"));
        assert!(text.contains("View Underlying Data"));
        assert!(text.contains("292634"));
    }

    #[test]
    fn test_chart_rows_keep_authored_order() {
        let mut surface = TextSurface::new();
        route(View::UsageVelocity, &Datasets::build(), &mut surface);
        let text = surface.into_string();

        let positions: Vec<_> = ["2021", "2022", "2023", "2024", "2025 (Proj)"]
            .iter()
            .map(|y| text.find(y).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("37.9 Txns/Mo"));
        assert!(text.contains("right axis: Value (Trn KES)"));
    }
}
