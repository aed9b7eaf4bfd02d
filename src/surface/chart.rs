//! Declarative chart descriptions
//!
//! A `ChartSpec` says what to plot, not how. The TUI turns it into ratatui
//! widgets; the text surface turns it into rows of glyph bars.

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
    /// Line with the region beneath it filled
    Area,
}

/// Which y axis a series is scaled against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// How hover/inspection groups points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverMode {
    #[default]
    Closest,
    /// All series at the same x category are reported together
    XUnified,
}

/// How multiple bar series share a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    #[default]
    Overlay,
    Group,
}

/// Format for value labels printed on bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// The value as authored (`35.82`)
    Auto,
    /// Two significant digits with an SI suffix (`870k`)
    Si2,
}

/// Series color, chosen from the dashboard's green/amber palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    DarkGreen,
    PaleGreen,
    Amber,
}

/// One plotted series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    /// One value per chart category, in category order
    pub values: Vec<f64>,
    pub axis: AxisSide,
    pub tone: Tone,
    pub labels: Option<LabelFormat>,
}

impl Series {
    pub fn new(name: impl Into<String>, kind: SeriesKind, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
            axis: AxisSide::Left,
            tone: Tone::Green,
            labels: None,
        }
    }

    pub fn on_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_labels(mut self, format: LabelFormat) -> Self {
        self.labels = Some(format);
        self
    }

    /// Largest value in the series (0.0 when empty)
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// A text callout pinned to a data point
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub category: String,
    pub value: f64,
    pub text: String,
}

/// A complete chart description
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    /// X-axis categories in authored order
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub y2_title: Option<String>,
    pub show_legend: bool,
    pub hover: HoverMode,
    pub bar_mode: BarMode,
    pub annotations: Vec<Annotation>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            title: title.into(),
            categories,
            series: Vec::new(),
            x_title: None,
            y_title: None,
            y2_title: None,
            show_legend: true,
            hover: HoverMode::default(),
            bar_mode: BarMode::default(),
            annotations: Vec::new(),
        }
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn x_title(mut self, title: impl Into<String>) -> Self {
        self.x_title = Some(title.into());
        self
    }

    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.y_title = Some(title.into());
        self
    }

    pub fn y2_title(mut self, title: impl Into<String>) -> Self {
        self.y2_title = Some(title.into());
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    pub fn hover(mut self, hover: HoverMode) -> Self {
        self.hover = hover;
        self
    }

    pub fn bar_mode(mut self, mode: BarMode) -> Self {
        self.bar_mode = mode;
        self
    }

    pub fn annotate(
        mut self,
        category: impl Into<String>,
        value: f64,
        text: impl Into<String>,
    ) -> Self {
        self.annotations.push(Annotation {
            category: category.into(),
            value,
            text: text.into(),
        });
        self
    }

    /// Whether any series is plotted against the right-hand axis
    pub fn has_secondary_axis(&self) -> bool {
        self.series.iter().any(|s| s.axis == AxisSide::Right)
    }

    /// Whether every series is a bar series on the left axis
    pub fn is_bar_only(&self) -> bool {
        !self.series.is_empty()
            && self
                .series
                .iter()
                .all(|s| s.kind == SeriesKind::Bar && s.axis == AxisSide::Left)
    }

    /// Largest value among series on one axis
    pub fn axis_max(&self, axis: AxisSide) -> f64 {
        self.series
            .iter()
            .filter(|s| s.axis == axis)
            .map(Series::max_value)
            .fold(0.0, f64::max)
    }

    /// Position of a category on the x axis
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> Vec<String> {
        vec!["2023".into(), "2024".into(), "2025 (HY)".into()]
    }

    #[test]
    fn test_builder_defaults() {
        let chart = ChartSpec::new("Counts", years());
        assert!(chart.show_legend);
        assert_eq!(chart.hover, HoverMode::Closest);
        assert_eq!(chart.bar_mode, BarMode::Overlay);
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_axis_max_per_side() {
        let chart = ChartSpec::new("Dual", years())
            .series(Series::new("a", SeriesKind::Bar, vec![1.0, 9.0, 3.0]))
            .series(
                Series::new("b", SeriesKind::Line, vec![40.0, 20.0, 10.0])
                    .on_axis(AxisSide::Right),
            );

        assert!(chart.has_secondary_axis());
        assert!(!chart.is_bar_only());
        assert_eq!(chart.axis_max(AxisSide::Left), 9.0);
        assert_eq!(chart.axis_max(AxisSide::Right), 40.0);
    }

    #[test]
    fn test_category_index() {
        let chart = ChartSpec::new("Counts", years());
        assert_eq!(chart.category_index("2025 (HY)"), Some(2));
        assert_eq!(chart.category_index("2021"), None);
    }
}
