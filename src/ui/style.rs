use ratatui::style::Color;
use ratatui::widgets::{Block, BorderType};

pub const TITLE_COLOR: Color = Color::Cyan;
pub const HELP_COLOR: Color = Color::Yellow;

/// Rounded bordered block used by every panel.
pub fn panel_block(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
}
