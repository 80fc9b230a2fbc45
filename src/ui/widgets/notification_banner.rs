//! Notification banner widget
//!
//! Displays short-lived feedback such as backend readiness changes.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::Notification;
use crate::ui::components;

/// Render a notification banner just above the status bar
pub fn render_notification_banner(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let banner_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let line = components::build_notification_line(notification);
    frame.render_widget(Paragraph::new(line), banner_area);
}
