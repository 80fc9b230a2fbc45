//! Story tab bar

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::ui::theme::tabs as colors;

/// Build the tab line, highlighting `current`
pub fn build_story_tabs(titles: &[&str], current: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(titles.len() * 2);

    for (i, title) in titles.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::INACTIVE)));
        }
        let style = if i == current {
            Style::default().fg(colors::ACTIVE).bold().underlined()
        } else {
            Style::default().fg(colors::INACTIVE)
        };
        spans.push(Span::styled(title.to_string(), style));
    }

    Line::from(spans)
}

pub fn render_story_tabs(frame: &mut Frame, area: Rect, titles: &[&str], current: usize) {
    let line = build_story_tabs(titles, current);
    frame.render_widget(Paragraph::new(line).centered(), area);
}
