//! Primary story rendering

use ratatui::{
    Frame,
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::PrimaryView;
use crate::model::VolumeChange;
use crate::ui::{components, widgets};

/// One change log entry
pub(super) fn change_line(index: usize, change: &VolumeChange) -> Line<'static> {
    let state = if change.muted {
        Span::styled("muted", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("unmuted", Style::default().fg(Color::Green))
    };

    Line::from(vec![
        Span::styled(format!("{:>2}. ", index + 1), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("volume {:>3}  ", change.volume)),
        state,
    ])
}

impl PrimaryView {
    /// Render the view
    pub fn render(&self, frame: &mut Frame, area: Rect, show_percentage: bool) {
        let chunks =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

        let control = components::panel_block("Volume", Color::Cyan);
        let inner = control.inner(chunks[0]);
        frame.render_widget(control, chunks[0]);
        widgets::render_volume_control(frame, inner, &self.controller, show_percentage);

        let block = components::panel_block("Listener", Color::Blue);
        let changes = self.changes.borrow();
        if changes.is_empty() {
            frame.render_widget(components::no_changes_state().block(block), chunks[1]);
            return;
        }

        let lines: Vec<Line> = changes
            .iter()
            .enumerate()
            .map(|(i, change)| change_line(i, change))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
    }
}
