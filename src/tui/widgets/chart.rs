//! Chart rendering
//!
//! Turns a `ChartSpec` into ratatui widgets. Bar-only charts use
//! `BarChart` (grouped when there are several series); anything with a
//! line or area uses the braille `Chart` canvas, with bars and fills drawn
//! as dense vertical strokes. A right-hand axis is simulated by scaling its
//! series into the left axis range and printing its own tick labels.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LegendPosition,
        Paragraph,
    },
    Frame,
};

use crate::display::format::format_label;
use crate::surface::{AxisSide, BarMode, ChartSpec, HoverMode, LabelFormat, Series, SeriesKind, Tone};

/// Horizontal spacing between strokes used to fill bars and areas
const FILL_STEP: f64 = 0.05;

/// Half the width of a bar on the XY canvas, in category units
const BAR_HALF_WIDTH: f64 = 0.3;

/// Bar values are stored as integers; keep two decimals of resolution
const BAR_SCALE: f64 = 100.0;

/// Map a palette tone to a terminal color
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Rgb(0x28, 0xa7, 0x45),
        Tone::DarkGreen => Color::Rgb(0x00, 0x64, 0x00),
        Tone::PaleGreen => Color::Rgb(0xb2, 0xd8, 0xb2),
        Tone::Amber => Color::Rgb(0xff, 0xbf, 0x00),
    }
}

/// Round an axis maximum up to a tidy value (161 -> 200, 43.5 -> 45)
pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    (value / magnitude * 2.0).ceil() / 2.0 * magnitude
}

fn axis_tick(value: f64) -> String {
    if value >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Render `spec` into `area`, with `cursor` selecting the readout category
pub fn render_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec, cursor: usize) {
    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", spec.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(footer) = footer_line(spec, cursor) {
        block = block.title(Title::from(footer).position(Position::Bottom));
    }

    if spec.is_bar_only() {
        render_bar_chart(frame, area, spec, block);
    } else {
        render_xy_chart(frame, area, spec, block);
    }
}

/// Bottom border text: the unified readout, or a legend for grouped bars
fn footer_line(spec: &ChartSpec, cursor: usize) -> Option<Line<'static>> {
    if let Some(readout) = unified_readout(spec, cursor) {
        return Some(readout);
    }

    if spec.is_bar_only() && spec.series.len() > 1 && spec.show_legend {
        let mut spans = vec![Span::raw(" ")];
        for series in &spec.series {
            spans.push(Span::styled("■ ", Style::default().fg(tone_color(series.tone))));
            spans.push(Span::raw(format!("{}  ", series.name)));
        }
        if let Some(y) = &spec.y_title {
            spans.push(Span::styled(format!("y: {} ", y), Style::default().fg(Color::DarkGray)));
        }
        return Some(Line::from(spans));
    }

    spec.y_title
        .as_ref()
        .filter(|_| spec.is_bar_only())
        .map(|y| Line::from(Span::styled(format!(" {} ", y), Style::default().fg(Color::DarkGray))))
}

/// Every series' value at the cursor category, for x-unified charts
pub fn unified_readout(spec: &ChartSpec, cursor: usize) -> Option<Line<'static>> {
    if spec.hover != HoverMode::XUnified || spec.categories.is_empty() {
        return None;
    }
    let index = cursor.min(spec.categories.len() - 1);

    let mut spans = vec![Span::styled(
        format!(" ▸ {} ", spec.categories[index]),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    for series in &spec.series {
        let value = series.values.get(index).copied().unwrap_or_default();
        spans.push(Span::styled("● ", Style::default().fg(tone_color(series.tone))));
        spans.push(Span::raw(format!(
            "{}: {}  ",
            series.name,
            format_label(value, series.labels.unwrap_or(LabelFormat::Auto))
        )));
    }
    Some(Line::from(spans))
}

fn render_bar_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec, block: Block) {
    let inner_width = area.width.saturating_sub(2);
    let groups = spec.categories.len().max(1) as u16;
    let per_group = spec.series.len().max(1) as u16;
    let group_gap = 2;
    // Grouped bars sit apart; overlaid bars share one block
    let bar_gap = if spec.bar_mode == BarMode::Group && per_group > 1 { 1 } else { 0 };

    let group_width = inner_width.saturating_sub(group_gap * (groups - 1)) / groups;
    let bar_width = (group_width.saturating_sub(bar_gap * (per_group - 1)) / per_group).clamp(1, 12);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .group_gap(group_gap);

    for (i, category) in spec.categories.iter().enumerate() {
        let bars: Vec<Bar> = spec.series.iter().map(|s| bar_for(s, i)).collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(category.clone()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

fn bar_for(series: &Series, index: usize) -> Bar<'static> {
    let value = series.values.get(index).copied().unwrap_or_default();
    let color = tone_color(series.tone);
    let text = series
        .labels
        .map(|format| format_label(value, format))
        .unwrap_or_default();

    Bar::default()
        .value((value * BAR_SCALE).round().max(0.0) as u64)
        .text_value(text)
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

/// Owned point data; `Dataset` only borrows
struct Plot {
    name: Option<String>,
    graph: GraphType,
    marker: symbols::Marker,
    color: Color,
    points: Vec<(f64, f64)>,
}

fn render_xy_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec, block: Block) {
    let left_max = nice_ceiling(spec.axis_max(AxisSide::Left));
    let right_max = nice_ceiling(spec.axis_max(AxisSide::Right));
    let x_max = (spec.categories.len().saturating_sub(1) as f64).max(1.0);

    let plots = build_plots(spec, left_max, right_max);
    let datasets: Vec<Dataset> = plots
        .iter()
        .map(|p| {
            let dataset = Dataset::default()
                .graph_type(p.graph)
                .marker(p.marker)
                .style(Style::default().fg(p.color))
                .data(&p.points);
            match &p.name {
                Some(name) => dataset.name(name.clone()),
                None => dataset,
            }
        })
        .collect();

    let axis_style = Style::default().fg(Color::Gray);

    let mut x_axis = Axis::default()
        .style(axis_style)
        .bounds([0.0, x_max])
        .labels(spec.categories.iter().map(|c| Span::raw(c.clone())).collect::<Vec<_>>());
    if let Some(title) = &spec.x_title {
        x_axis = x_axis.title(title.clone());
    }

    let mut y_axis = Axis::default()
        .style(axis_style)
        .bounds([0.0, left_max])
        .labels(vec![
            Span::raw("0"),
            Span::raw(axis_tick(left_max / 2.0)),
            Span::raw(axis_tick(left_max)),
        ]);
    if let Some(title) = &spec.y_title {
        y_axis = y_axis.title(title.clone());
    }

    let chart = Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopLeft));

    if !spec.has_secondary_axis() {
        frame.render_widget(chart.block(block), area);
        return;
    }

    let block = match &spec.y2_title {
        Some(title) => block.title(
            Title::from(Span::styled(format!(" {} ", title), Style::default().fg(Color::Gray)))
                .alignment(Alignment::Right),
        ),
        None => block,
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let ticks = [axis_tick(right_max), axis_tick(right_max / 2.0), "0".to_string()];
    let tick_width = ticks.iter().map(|t| t.len()).max().unwrap_or(1) as u16 + 1;

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(tick_width)])
        .split(inner);

    frame.render_widget(chart, split[0]);
    frame.render_widget(right_axis_labels(&ticks, split[1].height), split[1]);
}

/// Tick labels for the simulated right-hand axis, top to bottom
fn right_axis_labels(ticks: &[String; 3], height: u16) -> Paragraph<'static> {
    // The bottom two rows belong to the x-axis line and its labels
    let plot_rows = height.saturating_sub(2).max(1) as usize;
    let mut lines = vec![Line::raw(""); plot_rows];
    lines[0] = Line::raw(ticks[0].clone());
    lines[plot_rows / 2] = Line::raw(ticks[1].clone());
    lines[plot_rows - 1] = Line::raw(ticks[2].clone());

    Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right)
}

fn build_plots(spec: &ChartSpec, left_max: f64, right_max: f64) -> Vec<Plot> {
    let mut plots = Vec::new();

    for series in &spec.series {
        let scale = match series.axis {
            AxisSide::Left => 1.0,
            AxisSide::Right => left_max / right_max,
        };
        let values: Vec<f64> = series.values.iter().map(|v| v * scale).collect();
        let color = tone_color(series.tone);
        let name = spec.show_legend.then(|| series.name.clone());

        match series.kind {
            SeriesKind::Bar => plots.push(Plot {
                name,
                graph: GraphType::Bar,
                marker: symbols::Marker::HalfBlock,
                color,
                points: values
                    .iter()
                    .enumerate()
                    .flat_map(|(i, &v)| bar_strokes(i, v))
                    .collect(),
            }),
            SeriesKind::Area => {
                plots.push(Plot {
                    name: None,
                    graph: GraphType::Bar,
                    marker: symbols::Marker::Braille,
                    color,
                    points: area_strokes(&values),
                });
                plots.push(line_plot(name, &values, Color::White));
            }
            SeriesKind::Line => plots.push(line_plot(name, &values, color)),
        }
    }

    for note in &spec.annotations {
        if let Some(index) = spec.category_index(&note.category) {
            plots.push(Plot {
                name: Some(format!("◆ {}", note.text)),
                graph: GraphType::Scatter,
                marker: symbols::Marker::Dot,
                color: Color::Yellow,
                points: vec![(index as f64, note.value)],
            });
        }
    }

    plots
}

fn line_plot(name: Option<String>, values: &[f64], color: Color) -> Plot {
    Plot {
        name,
        graph: GraphType::Line,
        marker: symbols::Marker::Braille,
        color,
        points: values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect(),
    }
}

/// Vertical strokes filling one bar centred on category `index`
fn bar_strokes(index: usize, value: f64) -> Vec<(f64, f64)> {
    let center = index as f64;
    let steps = (2.0 * BAR_HALF_WIDTH / FILL_STEP).round() as usize;
    (0..=steps)
        .map(|s| (center - BAR_HALF_WIDTH + s as f64 * FILL_STEP, value))
        .collect()
}

/// Vertical strokes filling the region under a piecewise-linear series
fn area_strokes(values: &[f64]) -> Vec<(f64, f64)> {
    let per_segment = (1.0 / FILL_STEP).round() as usize;
    let mut points = Vec::with_capacity(values.len() * per_segment);

    for (i, pair) in values.windows(2).enumerate() {
        for s in 0..per_segment {
            let t = s as f64 / per_segment as f64;
            points.push((i as f64 + t, pair[0] + (pair[1] - pair[0]) * t));
        }
    }
    if let Some(&last) = values.last() {
        points.push(((values.len() - 1) as f64, last));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Datasets;
    use crate::surface::PageLayout;
    use crate::view::{route, View};

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(161.12), 200.0);
        assert_eq!(nice_ceiling(43.5), 45.0);
        assert_eq!(nice_ceiling(37.9), 40.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_area_strokes_cover_every_segment() {
        let points = area_strokes(&[10.0, 20.0, 10.0]);
        assert_eq!(points.len(), 41);
        assert_eq!(points[0], (0.0, 10.0));
        assert_eq!(points[10], (0.5, 15.0));
        assert_eq!(*points.last().unwrap(), (2.0, 10.0));
    }

    #[test]
    fn test_right_axis_series_scaled_into_left_range() {
        let mut page = PageLayout::new();
        route(View::UsageVelocity, &Datasets::build(), &mut page);
        let spec = page.charts()[0];

        let plots = build_plots(spec, 40.0, 45.0);
        let value_line = plots
            .iter()
            .find(|p| p.graph == GraphType::Line)
            .unwrap();
        let (_, y) = value_line.points[4];
        assert!((y - 43.5 * 40.0 / 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_unified_readout_clamps_cursor() {
        let mut page = PageLayout::new();
        route(View::UsageVelocity, &Datasets::build(), &mut page);

        let line = unified_readout(page.charts()[0], 99).unwrap();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("2025 (Proj)"));
        assert!(text.contains("Volume (Bn): 37.2"));
        assert!(text.contains("Value (Trn KES): 43.5"));

        assert!(unified_readout(page.charts()[1], 0).is_none());
    }

    #[test]
    fn test_annotation_becomes_named_point() {
        let mut page = PageLayout::new();
        route(View::UsageVelocity, &Datasets::build(), &mut page);
        let spec = page.charts()[1];

        let plots = build_plots(spec, 40.0, 1.0);
        let note = plots.last().unwrap();
        assert_eq!(note.name.as_deref(), Some("◆ 37.9 Txns/Mo"));
        assert_eq!(note.points, vec![(4.0, 37.9)]);
    }
}
