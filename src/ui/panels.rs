//! Rendering for individual chart panels.
//!
//! Each [`ChartKind`] maps to a ratatui widget: braille line chart, bar
//! chart, grouped bar chart with a legend line, or proportional ratio bars
//! standing in for the original pie.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::charts::{ChartData, ChartKind, STATUS_PALETTE};
use crate::ui::style::panel_block;

pub fn render_chart(chart: &ChartData, area: Rect, buf: &mut Buffer) {
    match chart.kind {
        ChartKind::Line => render_line(chart, area, buf),
        ChartKind::Bar => render_bar(chart, area, buf),
        ChartKind::Distribution => render_distribution(chart, area, buf),
        ChartKind::GroupedBar => render_grouped_bar(chart, area, buf),
    }
}

fn render_line(chart: &ChartData, area: Rect, buf: &mut Buffer) {
    let Some(series) = chart.series.first() else {
        return;
    };
    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    let max_x = points.len().saturating_sub(1).max(1) as f64;
    let max_y = chart.max_value().max(1.0);

    let datasets = vec![
        Dataset::default()
            .name(series.name)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(series.color))
            .data(&points),
    ];

    let widget = Chart::new(datasets)
        .block(panel_block(chart.title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(edge_labels(&chart.labels)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", max_y / 2.0),
                    format!("{:.0}", max_y),
                ]),
        );
    widget.render(area, buf);
}

fn render_bar(chart: &ChartData, area: Rect, buf: &mut Buffer) {
    let Some(series) = chart.series.first() else {
        return;
    };
    if chart.labels.is_empty() {
        panel_block(chart.title).render(area, buf);
        return;
    }

    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value(value.round().max(0.0) as u64)
                .style(Style::default().fg(series.color))
                .value_style(Style::default().fg(Color::Black).bg(series.color))
        })
        .collect();

    BarChart::default()
        .block(panel_block(chart.title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width_for(area.width, bars.len()))
        .bar_gap(1)
        .render(area, buf);
}

fn render_grouped_bar(chart: &ChartData, area: Rect, buf: &mut Buffer) {
    if chart.labels.is_empty() || chart.series.is_empty() {
        panel_block(chart.title).render(area, buf);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Bars
            Constraint::Length(1), // Legend
        ])
        .split(area);

    let mut widget = BarChart::default()
        .block(panel_block(chart.title))
        .bar_width(bar_width_for(layout[0].width, chart.labels.len() * chart.series.len()))
        .bar_gap(0)
        .group_gap(2);

    for (i, label) in chart.labels.iter().enumerate() {
        let bars: Vec<Bar> = chart
            .series
            .iter()
            .map(|series| {
                let value = series.values.get(i).copied().unwrap_or(0.0);
                Bar::default()
                    .value(value.round().max(0.0) as u64)
                    .text_value(String::new())
                    .style(Style::default().fg(series.color))
            })
            .collect();
        widget = widget.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }
    widget.render(layout[0], buf);

    let mut legend_spans = Vec::new();
    for series in &chart.series {
        legend_spans.push(Span::styled("■ ", Style::default().fg(series.color)));
        legend_spans.push(Span::raw(series.name));
        legend_spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(legend_spans))
        .alignment(Alignment::Center)
        .render(layout[1], buf);
}

fn render_distribution(chart: &ChartData, area: Rect, buf: &mut Buffer) {
    let Some(series) = chart.series.first() else {
        return;
    };
    let block = panel_block(chart.title);
    let inner = block.inner(area);
    block.render(area, buf);

    let total: f64 = series.values.iter().sum();
    if total <= 0.0 || inner.width == 0 {
        return;
    }

    let label_width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let usable = inner.width.saturating_sub(label_width as u16 + 14) as f64;

    let lines: Vec<Line> = chart
        .labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(i, (label, value))| {
            let share = value / total;
            let bar_len = ((share * usable).round() as usize).max(1);
            Line::from(vec![
                Span::raw(format!("{label:<label_width$} ")),
                Span::styled(
                    "█".repeat(bar_len),
                    Style::default().fg(STATUS_PALETTE[i % STATUS_PALETTE.len()]),
                ),
                Span::styled(
                    format!(" {} ({:.0}%)", *value as u64, share * 100.0),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}

/// First, middle, and last labels for a line chart's x axis.
fn edge_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

fn bar_width_for(area_width: u16, bar_count: usize) -> u16 {
    if bar_count == 0 {
        return 1;
    }
    (area_width.saturating_sub(2) / bar_count as u16)
        .saturating_sub(1)
        .clamp(3, 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_labels_pick_first_middle_last() {
        let labels: Vec<String> = ["January", "February", "March", "April", "May"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(edge_labels(&labels), vec!["January", "March", "May"]);
        assert!(edge_labels(&[]).is_empty());
    }

    #[test]
    fn bar_width_stays_in_bounds() {
        assert_eq!(bar_width_for(60, 5), 10);
        assert_eq!(bar_width_for(20, 12), 3);
        assert_eq!(bar_width_for(0, 4), 3);
        assert_eq!(bar_width_for(200, 4), 12);
    }
}
