//! Error and notification message components
//!
//! Provides consistent styling for error messages and notifications.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Colors for a notification kind: (label background, text foreground)
fn notification_colors(kind: NotificationKind) -> (Color, Color) {
    match kind {
        NotificationKind::Success => (Color::Green, Color::Green),
        NotificationKind::Info => (Color::Cyan, Color::Cyan),
        NotificationKind::Warning => (Color::Yellow, Color::Yellow),
    }
}

/// Build a notification line for banner display
pub fn build_notification_line(notification: &Notification) -> Line<'static> {
    let (label_bg, text_fg) = notification_colors(notification.kind);

    Line::from(vec![
        Span::styled(
            format!(" {} ", notification.kind.label()),
            Style::default().fg(Color::Black).bg(label_bg),
        ),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(text_fg),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_line() {
        let line = build_error_line("player reported error code 5");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, " Error: ");
        assert_eq!(line.spans[1].content, " player reported error code 5 ");
    }

    #[test]
    fn test_build_notification_line() {
        let line = build_notification_line(&Notification::success("Player ready"));
        assert_eq!(line.spans[0].content, " Success: ");
        assert_eq!(line.spans[1].content, " Player ready ");
    }

    #[test]
    fn test_build_notification_line_warning() {
        let line = build_notification_line(&Notification::warning("Backend not ready"));
        assert_eq!(line.spans[0].content, " Warning: ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Yellow));
    }
}
