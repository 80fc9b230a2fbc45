//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::widgets::{
    render_error_banner, render_help_panel, render_notification_banner, render_status_bar,
    render_story_tabs,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        match self.current_view {
            View::Help => self.render_help_view(frame),
            story => self.render_story(frame, story, notification),
        }

        // Errors are always shown prominently, above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }

    fn render_story(&self, frame: &mut Frame, story: View, notification: Option<&Notification>) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let titles = View::STORIES.map(View::title);
        render_story_tabs(frame, chunks[0], &titles, story.story_index().unwrap_or(0));

        let controller = match self.player_view(story) {
            Some(view) => {
                view.render(frame, chunks[1], self.show_percentage);
                view.controller()
            }
            None => {
                self.primary_view
                    .render(frame, chunks[1], self.show_percentage);
                self.primary_view.controller()
            }
        };

        if let Some(notification) = notification {
            render_notification_banner(frame, notification);
        }

        let hints = keys::story_hints(controller.is_muted(), story != View::Primary);
        render_status_bar(frame, &hints);
    }

    fn render_help_view(&self, frame: &mut Frame) {
        let area = frame.area();
        let help_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        render_help_panel(frame, help_area, self.help_scroll);
        render_status_bar(frame, keys::HELP_VIEW_HINTS);
    }
}
