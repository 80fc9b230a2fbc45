//! Placeholder text for panels with nothing to show yet

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Centered message with an optional dimmed hint below it
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(title.to_string()).centered()];
    lines.extend(hint.map(|hint| Line::from(hint.to_string()).dark_gray().centered()));
    Paragraph::new(lines)
}

/// Change log of the bare control before the first listener call
pub fn no_changes_state() -> Paragraph<'static> {
    empty_state("No volume changes yet.", Some("Press ←/→, 0-9 or m"))
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    use super::*;

    fn rows(paragraph: Paragraph<'static>, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(paragraph, Rect::new(0, 0, width, height)))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_no_changes_state_text() {
        let rows = rows(no_changes_state(), 30, 2);
        assert_eq!(rows[0].trim(), "No volume changes yet.");
        assert_eq!(rows[1].trim(), "Press ←/→, 0-9 or m");
    }

    #[test]
    fn test_empty_state_without_hint_is_one_line() {
        let rows = rows(empty_state("Waiting for player", None), 24, 2);
        assert_eq!(rows[0].trim(), "Waiting for player");
        assert!(rows[1].trim().is_empty());
    }
}
