//! Usage & Velocity view

use crate::data::Datasets;
use crate::surface::{AxisSide, ChartSpec, HoverMode, Series, SeriesKind, Surface, Tone};

/// Callout pinned to the projected velocity point
const VELOCITY_CALLOUT: &str = "37.9 Txns/Mo";
const VELOCITY_CALLOUT_YEAR: &str = "2025 (Proj)";
const VELOCITY_CALLOUT_VALUE: f64 = 37.9;

/// Render the Usage & Velocity view into `surface`
pub fn render(data: &Datasets, surface: &mut dyn Surface) {
    surface.chart(&volume_value_chart(data));
    surface.chart(&velocity_chart(data));
}

/// Volume bars on the left axis against value on an independent right axis
fn volume_value_chart(data: &Datasets) -> ChartSpec {
    ChartSpec::new("Transaction Volume vs. Value", data.financial.fiscal_years())
        .series(
            Series::new(
                "Volume (Bn)",
                SeriesKind::Bar,
                data.financial.column(|r| r.total_txn_volume_bn),
            )
            .tone(Tone::PaleGreen),
        )
        .series(
            Series::new(
                "Value (Trn KES)",
                SeriesKind::Line,
                data.financial.column(|r| r.total_txn_value_trn),
            )
            .on_axis(AxisSide::Right)
            .tone(Tone::DarkGreen),
        )
        .y_title("Volume (Bn Transactions)")
        .y2_title("Value (Trn KES)")
        .hover(HoverMode::XUnified)
}

fn velocity_chart(data: &Datasets) -> ChartSpec {
    ChartSpec::new(
        "Average Transactions Per User (Monthly)",
        data.financial.fiscal_years(),
    )
    .series(
        Series::new(
            "Txn_Velocity_Monthly",
            SeriesKind::Area,
            data.financial.column(|r| r.txn_velocity_monthly),
        )
        .tone(Tone::Green),
    )
    .y_title("Txns per User / Month")
    .annotate(VELOCITY_CALLOUT_YEAR, VELOCITY_CALLOUT_VALUE, VELOCITY_CALLOUT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PageLayout;

    fn rendered() -> PageLayout {
        let mut page = PageLayout::new();
        render(&Datasets::build(), &mut page);
        page
    }

    #[test]
    fn test_dual_axis_chart() {
        let page = rendered();
        let chart = page.charts()[0];

        assert_eq!(chart.hover, HoverMode::XUnified);
        assert!(chart.has_secondary_axis());
        assert_eq!(chart.series[0].kind, SeriesKind::Bar);
        assert_eq!(chart.series[0].axis, AxisSide::Left);
        assert_eq!(chart.series[1].kind, SeriesKind::Line);
        assert_eq!(chart.series[1].axis, AxisSide::Right);
        assert_eq!(chart.y2_title.as_deref(), Some("Value (Trn KES)"));
        assert_eq!(chart.axis_max(AxisSide::Right), 43.50);
    }

    #[test]
    fn test_velocity_area_annotation() {
        let page = rendered();
        let chart = page.charts()[1];

        assert_eq!(chart.series[0].kind, SeriesKind::Area);
        assert_eq!(chart.annotations.len(), 1);
        let note = &chart.annotations[0];
        assert_eq!(note.text, "37.9 Txns/Mo");
        assert_eq!(chart.category_index(&note.category), Some(4));
        assert_eq!(note.value, *chart.series[0].values.last().unwrap());
    }

    #[test]
    fn test_no_cards() {
        assert!(rendered().cards().is_empty());
    }
}
