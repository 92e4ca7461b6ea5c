use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::app::App;
use crate::format::format_currency;
use crate::ui::{panels, style};

/// Screen shown before the snapshot resolves and after a failed fetch.
pub fn render_waiting(area: Rect, buf: &mut Buffer, message: &str) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Message
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_title(main_layout[0], buf);

    let placeholder = Paragraph::new(message.to_string())
        .block(style::panel_block("Status"))
        .alignment(Alignment::Center);
    placeholder.render(centered_rect(50, 30, main_layout[1]), buf);

    render_help(main_layout[2], buf);
}

/// The full dashboard: summary metrics plus a two-column grid of whichever
/// chart panels are bound.
pub fn render_dashboard(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Summary metrics
            Constraint::Min(1),    // Chart grid
            Constraint::Length(3), // Help
        ])
        .split(area);

    render_title(main_layout[0], buf);
    render_summary(app, main_layout[1], buf);
    render_grid(app, main_layout[2], buf);
    render_help(main_layout[3], buf);
}

fn render_title(area: Rect, buf: &mut Buffer) {
    let title = Paragraph::new("E-commerce Dashboard")
        .block(style::panel_block("shopdash"))
        .fg(style::TITLE_COLOR)
        .alignment(Alignment::Center);
    title.render(area, buf);
}

fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(snapshot) = &app.snapshot else {
        return;
    };
    // Total sales verbatim; revenue with thousands separators.
    let lines = vec![
        Line::from(format!("Total Sales: {}", snapshot.total_sales)),
        Line::from(format!(
            "Total Revenue: {}",
            format_currency(snapshot.total_revenue)
        )),
    ];
    let summary = Paragraph::new(lines).block(style::panel_block("Summary Metrics"));
    summary.render(area, buf);
}

fn render_grid(app: &App, area: Rect, buf: &mut Buffer) {
    let panel_ids = app.surfaces.bound_panels();
    if panel_ids.is_empty() {
        return;
    }

    let rows: Vec<_> = panel_ids.chunks(2).collect();
    let row_constraints = vec![Constraint::Ratio(1, rows.len() as u32); rows.len()];
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (panel_id, column) in row.iter().zip(columns.iter()) {
            if let Some(chart) = app.surfaces.get(*panel_id) {
                panels::render_chart(chart, *column, buf);
            }
        }
    }
}

fn render_help(area: Rect, buf: &mut Buffer) {
    let help = Paragraph::new("q / Esc: Quit")
        .block(style::panel_block("Controls"))
        .fg(style::HELP_COLOR)
        .alignment(Alignment::Center);
    help.render(area, buf);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
