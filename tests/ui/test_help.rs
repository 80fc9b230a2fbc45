//! Render tests for the Help panel

use ratatui::{Terminal, backend::TestBackend};

use volstage::keys;
use volstage::ui::widgets::render_help_panel;

use crate::common::{buffer_lines, screen_contains};

#[test]
fn test_help_panel_full() {
    let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 0);
        })
        .unwrap();

    let backend = terminal.backend();
    assert!(screen_contains(backend, "Volstage - Help"));
    for entry in keys::GLOBAL_KEYS
        .iter()
        .chain(keys::VOLUME_KEYS)
        .chain(keys::PLAYER_KEYS)
    {
        assert!(
            screen_contains(backend, entry.description),
            "missing {}",
            entry.description
        );
    }
}

#[test]
fn test_help_panel_scrolled() {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 2);
        })
        .unwrap();

    let lines = buffer_lines(terminal.backend());
    // Row 0 is the border; the "Key bindings:" header scrolled away
    assert!(!lines.iter().any(|l| l.contains("Key bindings:")));
    insta::assert_snapshot!(lines[1].trim_matches('│').trim(), @"Global:");
}
