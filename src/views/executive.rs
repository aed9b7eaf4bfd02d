//! Executive Summary view
//!
//! Headline cards for the FY25 projection, then revenue and active-user
//! charts across all five fiscal years.

use crate::data::Datasets;
use crate::surface::{ChartSpec, LabelFormat, MetricCard, Series, SeriesKind, Surface, Tone};

/// Year-over-year deltas quoted alongside the FY25 projection cards
const REVENUE_DELTA: &str = "↑ 15.2% YoY";
const USERS_DELTA: &str = "↑ 10.5% YoY";
const VELOCITY_DELTA: &str = "↑ 20.3% YoY";
const VALUE_DELTA: &str = "↑ 8.1% YoY";

/// Render the Executive Summary into `surface`
pub fn render(data: &Datasets, surface: &mut dyn Surface) {
    for card in cards(data) {
        surface.metric_card(&card);
    }
    surface.chart(&revenue_chart(data));
    surface.chart(&active_users_chart(data));
}

fn cards(data: &Datasets) -> [MetricCard; 4] {
    let latest = data.financial.latest();
    [
        MetricCard::new(
            "Revenue (FY25 Proj)",
            format!("KES {:.1}B", latest.revenue_bn),
            REVENUE_DELTA,
        ),
        MetricCard::new(
            "Active Cust. (1-Mo)",
            format!("{:.2} M", latest.active_users_m),
            USERS_DELTA,
        ),
        MetricCard::new(
            "Txn Velocity (Per User)",
            format!("{:.1} / mo", latest.txn_velocity_monthly),
            VELOCITY_DELTA,
        ),
        MetricCard::new(
            "Total Txn Value",
            format!("KES {:.1} Trn", latest.total_txn_value_trn),
            VALUE_DELTA,
        ),
    ]
}

/// Revenue as a line with translucent bars beneath it
fn revenue_chart(data: &Datasets) -> ChartSpec {
    let revenue = data.financial.column(|r| r.revenue_bn);

    ChartSpec::new(
        "Annual Revenue Growth (KES Billions)",
        data.financial.fiscal_years(),
    )
    .series(Series::new("Revenue_Bn", SeriesKind::Line, revenue.clone()).tone(Tone::Green))
    .series(Series::new("Revenue", SeriesKind::Bar, revenue).tone(Tone::PaleGreen))
    .x_title("Fiscal Year")
    .y_title("Revenue (Bn)")
    .hide_legend()
}

fn active_users_chart(data: &Datasets) -> ChartSpec {
    ChartSpec::new("Active 1-Month Customers", data.financial.fiscal_years())
        .series(
            Series::new(
                "Active_Users_M",
                SeriesKind::Bar,
                data.financial.column(|r| r.active_users_m),
            )
            .tone(Tone::DarkGreen)
            .with_labels(LabelFormat::Auto),
        )
        .y_title("Users (Millions)")
}
