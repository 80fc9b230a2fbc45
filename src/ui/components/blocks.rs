//! Panel blocks for the story views

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, BorderType, Padding},
};

/// Create a story panel: rounded borders, bold colored title, one column
/// of horizontal padding
pub fn panel_block(title: &str, color: Color) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Line::from(format!(" {title} ")).bold().fg(color))
        .padding(Padding::horizontal(1))
}
