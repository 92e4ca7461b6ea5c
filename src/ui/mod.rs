pub mod dashboard;
pub mod panels;
pub mod style;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::{App, AppMode};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            AppMode::Loading => dashboard::render_waiting(area, buf, "Loading data..."),
            AppMode::NoData => dashboard::render_waiting(area, buf, "No data available"),
            AppMode::Ready => dashboard::render_dashboard(self, area, buf),
        }
    }
}
