//! View selection and routing
//!
//! The dashboard has exactly three views. `View` is a closed enum, so an
//! out-of-range selection cannot be represented; `route` dispatches through
//! a static lookup table.

use std::fmt;
use std::str::FromStr;

use crate::data::Datasets;
use crate::error::DashboardError;
use crate::surface::Surface;
use crate::views;

/// The three dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    ExecutiveSummary,
    UsageVelocity,
    MerchantEcosystem,
}

/// Provenance note shown alongside every view
pub const DATA_SOURCE_NOTE: &str =
    "Safaricom Annual Reports (FY21-FY24) & HY25 Investor Briefing.";

/// Caveat on the projected fiscal year
pub const ANALYST_NOTE: &str =
    "FY25 figures are based on HY25 actuals annualized + analyst projections.";

/// Signature shared by every view renderer
pub type RenderFn = fn(&Datasets, &mut dyn Surface);

/// Renderer lookup table, in selector order
pub static ROUTES: [(View, RenderFn); 3] = [
    (View::ExecutiveSummary, views::executive::render),
    (View::UsageVelocity, views::usage::render),
    (View::MerchantEcosystem, views::merchant::render),
];

impl View {
    /// All views in selector order
    pub const ALL: [View; 3] = [
        View::ExecutiveSummary,
        View::UsageVelocity,
        View::MerchantEcosystem,
    ];

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary",
            Self::UsageVelocity => "Usage & Velocity",
            Self::MerchantEcosystem => "Merchant Ecosystem",
        }
    }

    /// Short name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executive",
            Self::UsageVelocity => "usage",
            Self::MerchantEcosystem => "merchant",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary: M-Pesa Performance",
            Self::UsageVelocity => "Usage Patterns: The Velocity Shift",
            Self::MerchantEcosystem => "The Merchant Ecosystem (Lipa Na M-Pesa)",
        }
    }

    /// One-line framing shown under the heading
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::ExecutiveSummary => {
                "Tracking the post-Covid recovery and the shift towards high-frequency usage."
            }
            Self::UsageVelocity => {
                "While user growth is stabilizing, usage intensity is exploding. Customers \
                 are not just sending money; they are living their financial lives on the app."
            }
            Self::MerchantEcosystem => {
                "The battle for the informal sector: Pochi La Biashara is the fastest \
                 growing segment."
            }
        }
    }

    /// Analyst commentary shown below the charts, if the view has any
    pub fn insight(&self) -> Option<&'static str> {
        match self {
            Self::UsageVelocity => Some(
                "Analyst Take: The gap between Volume (bars) and Value (line) is widening. \
                 This confirms the rise of micro-transactions (paying for small goods, \
                 bodaboda, snacks) rather than just bulk rent/school fee transfers.",
            ),
            _ => None,
        }
    }

    /// Position in the selector
    pub fn index(&self) -> usize {
        match self {
            Self::ExecutiveSummary => 0,
            Self::UsageVelocity => 1,
            Self::MerchantEcosystem => 2,
        }
    }

    /// View at a selector position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next view in the selector, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous view in the selector, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Renderer for this view
    pub fn renderer(&self) -> RenderFn {
        ROUTES[self.index()].1
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = DashboardError;

    /// Accepts a slug (`usage`) or a full label (`Usage & Velocity`), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(wanted) || v.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::unknown_view(wanted))
    }
}

/// Render `view` into `surface`
pub fn route(view: View, data: &Datasets, surface: &mut dyn Surface) {
    tracing::debug!(view = view.label(), "Rendering view");
    (view.renderer())(data, surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ChartSpec, MetricCard, PageLayout, TableSpec};

    /// Counts calls and remembers the first card label it saw
    #[derive(Default)]
    struct CountingSurface {
        calls: usize,
        first_card: Option<String>,
    }

    impl Surface for CountingSurface {
        fn metric_card(&mut self, card: &MetricCard) {
            self.calls += 1;
            self.first_card.get_or_insert_with(|| card.label.clone());
        }

        fn chart(&mut self, _chart: &ChartSpec) {
            self.calls += 1;
        }

        fn table(&mut self, _table: &TableSpec) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_default_is_executive_summary() {
        assert_eq!(View::default(), View::ExecutiveSummary);
    }

    #[test]
    fn test_routes_match_selector_order() {
        for (i, (view, _)) in ROUTES.iter().enumerate() {
            assert_eq!(view.index(), i);
            assert_eq!(View::from_index(i), Some(*view));
        }
        assert_eq!(View::from_index(3), None);
    }

    #[test]
    fn test_every_view_renders_non_empty_layout() {
        let data = Datasets::build();
        for view in View::ALL {
            let mut page = PageLayout::new();
            route(view, &data, &mut page);
            assert!(!page.is_empty(), "{} rendered nothing", view);
        }
    }

    #[test]
    fn test_route_dispatches_to_matching_renderer() {
        let data = Datasets::build();

        let mut surface = CountingSurface::default();
        route(View::ExecutiveSummary, &data, &mut surface);
        assert_eq!(surface.calls, 6);
        assert_eq!(surface.first_card.as_deref(), Some("Revenue (FY25 Proj)"));

        let mut surface = CountingSurface::default();
        route(View::UsageVelocity, &data, &mut surface);
        assert_eq!(surface.calls, 2);
        assert_eq!(surface.first_card, None);

        let mut surface = CountingSurface::default();
        route(View::MerchantEcosystem, &data, &mut surface);
        assert_eq!(surface.calls, 4);
        assert_eq!(surface.first_card.as_deref(), Some("Pochi Active Tills (HY25)"));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = View::ALL.iter().map(View::label).collect();
        assert_eq!(
            labels,
            vec!["Executive Summary", "Usage & Velocity", "Merchant Ecosystem"]
        );
    }

    #[test]
    fn test_parse_slug_and_label() {
        assert_eq!("usage".parse::<View>().unwrap(), View::UsageVelocity);
        assert_eq!(
            "merchant ecosystem".parse::<View>().unwrap(),
            View::MerchantEcosystem
        );
        assert!("overview".parse::<View>().unwrap_err().is_unknown());
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(View::MerchantEcosystem.next(), View::ExecutiveSummary);
        assert_eq!(View::ExecutiveSummary.prev(), View::MerchantEcosystem);
        assert_eq!(View::UsageVelocity.next(), View::MerchantEcosystem);
    }
}
