//! Rendering surface
//!
//! Views never touch a terminal directly. They push metric cards, charts
//! and tables into a `Surface`, which lets the same view code drive the
//! TUI, the plain-text printer, and tests.

pub mod chart;
pub mod table;

pub use chart::{
    Annotation, AxisSide, BarMode, ChartSpec, HoverMode, LabelFormat, Series, SeriesKind, Tone,
};
pub use table::TableSpec;

/// A headline number with its change indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl MetricCard {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        delta: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: delta.into(),
        }
    }
}

/// The rendering capabilities a view may use
pub trait Surface {
    /// Render a labeled metric card
    fn metric_card(&mut self, card: &MetricCard);

    /// Render a chart
    fn chart(&mut self, chart: &ChartSpec);

    /// Render a raw table
    fn table(&mut self, table: &TableSpec);
}

/// One recorded rendering call
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Card(MetricCard),
    Chart(ChartSpec),
    Table(TableSpec),
}

/// A surface that records what a view rendered, in call order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    elements: Vec<Element>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn cards(&self) -> Vec<&MetricCard> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Card(card) => Some(card),
                _ => None,
            })
            .collect()
    }

    pub fn charts(&self) -> Vec<&ChartSpec> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Chart(chart) => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<&TableSpec> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }
}

impl Surface for PageLayout {
    fn metric_card(&mut self, card: &MetricCard) {
        self.elements.push(Element::Card(card.clone()));
    }

    fn chart(&mut self, chart: &ChartSpec) {
        self.elements.push(Element::Chart(chart.clone()));
    }

    fn table(&mut self, table: &TableSpec) {
        self.elements.push(Element::Table(table.clone()));
    }
}
