//! Merchant Ecosystem view
//!
//! Compares informal Pochi tills against formal Lipa Na M-Pesa merchants.
//! Pochi growth is the one figure computed at render time; the LNM delta
//! is quoted as published.

use crate::data::{Datasets, MerchantType};
use crate::display::format::format_thousands;
use crate::metrics::{format_one_decimal, growth_percent};
use crate::surface::{
    BarMode, ChartSpec, LabelFormat, MetricCard, Series, SeriesKind, Surface, TableSpec, Tone,
};

/// Pochi active tills at FY24 and HY25
pub const POCHI_FY24: u64 = 632_681;
pub const POCHI_HY25: u64 = 869_000;

const LNM_HY25: u64 = 658_700;
const LNM_DELTA: &str = "↑ 4.1% vs FY24";

/// Title of the on-demand raw data table
pub const UNDERLYING_DATA_TITLE: &str = "View Underlying Data";

/// Render the Merchant Ecosystem view into `surface`
pub fn render(data: &Datasets, surface: &mut dyn Surface) {
    surface.metric_card(&MetricCard::new(
        "Pochi Active Tills (HY25)",
        format_thousands(POCHI_HY25),
        format!("↑ {}% vs FY24", format_one_decimal(pochi_growth())),
    ));
    surface.metric_card(&MetricCard::new(
        "LNM Active Merchants (HY25)",
        format_thousands(LNM_HY25),
        LNM_DELTA,
    ));

    surface.chart(&merchant_chart(data));
    surface.table(&TableSpec::merchant_raw(UNDERLYING_DATA_TITLE, &data.merchant));
}

/// Pochi till growth from FY24 to HY25, in percent
pub fn pochi_growth() -> f64 {
    // POCHI_FY24 is a nonzero literal
    growth_percent(POCHI_FY24 as f64, POCHI_HY25 as f64).unwrap_or_default()
}

/// Grouped bars built from the long-form merchant table
fn merchant_chart(data: &Datasets) -> ChartSpec {
    let long = data.merchant.melt();
    let categories = data.merchant.fiscal_years();

    let mut chart = ChartSpec::new("Active Merchants: Pochi vs. Standard Tills", categories.clone())
        .bar_mode(BarMode::Group)
        .y_title("Active Tills");

    for merchant_type in MerchantType::ALL {
        let values = categories
            .iter()
            .map(|year| {
                long.iter()
                    .find(|r| r.merchant_type == merchant_type && r.fiscal_year.label() == year)
                    .map_or(0.0, |r| r.count as f64)
            })
            .collect();

        let tone = match merchant_type {
            MerchantType::Pochi => Tone::Amber,
            MerchantType::LipaNaMpesa => Tone::Green,
        };

        chart = chart.series(
            Series::new(merchant_type.display_label(), SeriesKind::Bar, values)
                .tone(tone)
                .with_labels(LabelFormat::Si2),
        );
    }

    chart
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
    fn test_pochi_growth_one_decimal() {
        assert_eq!(format_one_decimal(pochi_growth()), "37.4");
    }

    #[test]
    fn test_literal_endpoints_match_table() {
        let data = Datasets::build();
        assert_eq!(data.merchant.find("2024").unwrap().pochi_active_tills, POCHI_FY24);
        assert_eq!(data.merchant.find("2025 (HY)").unwrap().pochi_active_tills, POCHI_HY25);
        assert_eq!(data.merchant.find("2025 (HY)").unwrap().lnm_active_merchants, LNM_HY25);
    }

    #[test]
    fn test_cards() {
        let page = rendered();
        let cards = page.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(
            *cards[0],
            MetricCard::new("Pochi Active Tills (HY25)", "869,000", "↑ 37.4% vs FY24")
        );
        assert_eq!(
            *cards[1],
            MetricCard::new("LNM Active Merchants (HY25)", "658,700", "↑ 4.1% vs FY24")
        );
    }

    #[test]
    fn test_grouped_chart_from_long_form() {
        let page = rendered();
        let chart = page.charts()[0];

        assert_eq!(chart.bar_mode, BarMode::Group);
        assert_eq!(chart.categories, vec!["2023", "2024", "2025 (HY)"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Pochi (Informal)");
        assert_eq!(chart.series[0].values, vec![292_634.0, 632_681.0, 869_000.0]);
        assert_eq!(chart.series[1].name, "Lipa Na M-Pesa (Formal)");
        assert_eq!(chart.series[1].values, vec![606_660.0, 633_000.0, 658_700.0]);
    }

    #[test]
    fn test_underlying_table_emitted() {
        let page = rendered();
        let tables = page.tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].title, UNDERLYING_DATA_TITLE);
        assert_eq!(tables[0].rows.len(), 3);
    }
}
