//! Error banner widget
//!
//! Backend failures take over the notification row above the status bar
//! until the next key press clears them.

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Clear, Paragraph},
};

use crate::ui::components;

/// Row shared with the notification banner, inset by two columns
pub fn error_banner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: area.height.min(1),
    }
}

/// Render a backend error over the notification row
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let banner = error_banner_area(frame.area());
    frame.render_widget(Clear, banner);
    frame.render_widget(Paragraph::new(components::build_error_line(error)), banner);
}
