//! Render tests for the whole application screen

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};

use volstage::app::{App, View};
use volstage::media::BackendStatus;

use crate::common::{buffer_lines, press, screen_contains, test_app, tick_until};

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

#[test]
fn test_primary_story_screen() {
    let app = test_app();
    let terminal = draw(&app);
    let backend = terminal.backend();

    let lines = buffer_lines(backend);
    assert!(lines[0].contains("Primary │ Embedded Stream │ Video Stream │ Local Video"));
    assert!(screen_contains(backend, "No volume changes yet."));
    assert!(screen_contains(backend, "[m] Mute"));
    assert!(!screen_contains(backend, "[r] Remount"));
}

#[test]
fn test_primary_story_logs_changes() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('8'));
    press(&mut app, KeyCode::Char('m'));

    let terminal = draw(&app);
    let backend = terminal.backend();
    assert!(screen_contains(backend, " 1. volume  80  unmuted"));
    assert!(screen_contains(backend, " 2. volume   0  muted"));
    assert!(screen_contains(backend, "[m] Unmute"));
}

#[test]
fn test_player_story_screen() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    tick_until(&mut app, |app| app.embed_view.status().is_ready());

    let terminal = draw(&app);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "[Playing]"));
    assert!(screen_contains(backend, "[r] Remount"));
    assert!(screen_contains(backend, "Embedded Stream ready"));
}

#[test]
fn test_error_banner_after_failure() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    tick_until(&mut app, |app| app.video_view.status().is_ready());

    press(&mut app, KeyCode::Char('x'));
    app.tick();
    assert!(matches!(app.video_view.status(), BackendStatus::Error(_)));

    let terminal = draw(&app);
    assert!(screen_contains(terminal.backend(), "Video Stream: backend command failed"));
}

#[test]
fn test_help_screen() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.current_view, View::Help);

    let terminal = draw(&app);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "Volstage - Help"));
    assert!(screen_contains(backend, "[q] Back"));
}

#[test]
fn test_percentage_hidden() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('p'));

    let terminal = draw(&app);
    let backend = terminal.backend();
    assert!(!screen_contains(backend, "50%"));
    assert!(screen_contains(backend, "Percentage hidden"));
}
