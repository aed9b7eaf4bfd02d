//! CLI command for printing views as text
//!
//! Routes each requested view through a `TextSurface` and prints the result.

use std::str::FromStr;

use clap::Args;

use crate::data::Datasets;
use crate::display::format::double_separator;
use crate::display::TextSurface;
use crate::error::{DashboardError, DashboardResult};
use crate::view::{self, View, ANALYST_NOTE, DATA_SOURCE_NOTE};

/// Which view(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTarget {
    One(View),
    #[default]
    All,
}

impl ViewTarget {
    /// Views to print, in selector order
    pub fn views(&self) -> Vec<View> {
        match self {
            Self::One(view) => vec![*view],
            Self::All => View::ALL.to_vec(),
        }
    }
}

impl FromStr for ViewTarget {
    type Err = DashboardError;

    /// `all`, or anything `View` accepts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

/// Arguments for `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// View to print: executive, usage, merchant or all
    #[arg(long, default_value = "all")]
    pub view: ViewTarget,
}

/// Handle the show command
pub fn handle_show_command(data: &Datasets, args: ShowArgs) -> DashboardResult<()> {
    print!("{}", render_text(data, args.view));
    Ok(())
}

/// Render the requested views, followed by the data notes
pub fn render_text(data: &Datasets, target: ViewTarget) -> String {
    let mut surface = TextSurface::new();

    for view in target.views() {
        surface.line(view.title());
        surface.line(double_separator(view.title().chars().count()));
        surface.line(view.tagline());
        surface.line("");

        view::route(view, data, &mut surface);

        if let Some(insight) = view.insight() {
            surface.line("");
            surface.line(insight);
        }
        surface.line("");
    }

    surface.line(format!("Data Source: {}", DATA_SOURCE_NOTE));
    surface.line(format!("Analyst Note: {}", ANALYST_NOTE));

    surface.into_string()
}
