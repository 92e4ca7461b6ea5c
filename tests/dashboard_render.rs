//! End-to-end rendering tests against a test backend.

use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use shopdash::app::App;
use shopdash::snapshot::MetricsSnapshot;
use shopdash::source::MockSource;

fn test_app() -> App {
    App::new(Box::new(MockSource::new(Duration::from_millis(1000))))
}

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(120, 50);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|frame| frame.render_widget(app, frame.area()))
        .expect("failed to draw");

    let buffer = terminal.backend().buffer().clone();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn loading_screen_shows_placeholder() {
    let mut app = test_app();
    let screen = draw(&mut app);
    assert!(screen.contains("E-commerce Dashboard"));
    assert!(screen.contains("Loading data..."));
    assert!(!screen.contains("Total Sales"));
}

#[tokio::test]
async fn mock_snapshot_renders_five_panels_and_summary() {
    let mut app = test_app();
    app.apply_snapshot(MetricsSnapshot::mock());
    let screen = draw(&mut app);

    assert!(screen.contains("Total Sales: 1200"));
    assert!(screen.contains("45,000"));

    assert!(screen.contains("Sales Trends Over Time (2025)"));
    assert!(screen.contains("Top-Selling Products (2025)"));
    assert!(screen.contains("Order Status Distribution (2025)"));
    assert!(screen.contains("Inventory Stock Levels (2025)"));
    assert!(screen.contains("Revenue by Product Category (2025)"));

    // Distribution rows carry their status labels and share of the total.
    assert!(screen.contains("Pending"));
    assert!(screen.contains("Delivered"));
}

#[tokio::test]
async fn summary_only_snapshot_renders_no_chart_sections() {
    let mut app = test_app();
    let snapshot: MetricsSnapshot =
        serde_json::from_str(r#"{"total_sales": 10, "total_revenue": 500}"#).unwrap();
    app.apply_snapshot(snapshot);
    let screen = draw(&mut app);

    assert!(screen.contains("Total Sales: 10"));
    assert!(screen.contains("Total Revenue: $500"));
    assert!(!screen.contains("Sales Trends"));
    assert!(!screen.contains("Inventory"));
}

#[tokio::test]
async fn failed_fetch_shows_no_data_screen() {
    let mut app = test_app();
    app.mark_failed();
    let screen = draw(&mut app);
    assert!(screen.contains("No data available"));
    assert!(!screen.contains("Total Sales"));
}

#[tokio::test]
async fn teardown_after_render_releases_every_chart() {
    let mut app = test_app();
    app.apply_snapshot(MetricsSnapshot::mock());
    let _ = draw(&mut app);
    app.teardown();
    assert!(app.surfaces.is_balanced());
    assert_eq!(app.surfaces.created(), app.surfaces.released());
}
