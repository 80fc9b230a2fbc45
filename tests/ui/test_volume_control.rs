//! Render tests for the volume control row

use ratatui::{Terminal, backend::TestBackend};

use volstage::control::VolumeController;
use volstage::ui::widgets::render_volume_control;

use crate::common::buffer_lines;

/// Render one 30-column row and return its text
fn render(controller: &VolumeController, show_percentage: bool) -> String {
    let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
    terminal
        .draw(|frame| {
            render_volume_control(frame, frame.area(), controller, show_percentage);
        })
        .unwrap();
    buffer_lines(terminal.backend()).remove(0)
}

#[test]
fn test_volume_control_percentage() {
    let controller = VolumeController::new(50);
    let row = render(&controller, true);
    assert!(row.ends_with("█████████░░░░░░░░░░   50%"), "{row}");
}

#[test]
fn test_volume_control_muted() {
    let mut controller = VolumeController::new(80);
    controller.toggle_mute();
    let row = render(&controller, true);
    assert!(row.ends_with("Muted"));
    assert!(!row.contains('█'));
}

#[test]
fn test_volume_control_without_percentage() {
    let controller = VolumeController::new(100);
    let row = render(&controller, false);
    assert!(!row.contains('%'));
    assert!(row.ends_with('█'));
}

#[test]
fn test_volume_control_zero_is_not_muted_label() {
    let mut controller = VolumeController::new(40);
    controller.set_volume(0);
    let row = render(&controller, true);
    assert!(row.ends_with(" 0%"));
    assert!(!row.contains("Muted"));
}
