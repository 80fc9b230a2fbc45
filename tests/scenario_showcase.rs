//! Story: Browsing the showcase
//!
//! Scenario: a user walks through every story with the keyboard.
//!
//! 1. Adjust the bare control
//! 2. Tab to the embedded stream, wait for it, change the volume
//! 3. Break the player and remount it
//! 4. Tab through the video stories and quit

#[path = "common/mod.rs"]
mod common;

use crossterm::event::KeyCode;

use common::{press, test_app, tick_until};
use volstage::app::View;
use volstage::media::BackendStatus;

#[test]
fn story_walk_through_showcase() {
    let mut app = test_app();

    // Step 1: bare control
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('m'));
    assert!(app.primary_view.controller().is_muted());
    assert_eq!(app.primary_view.changes().len(), 2);

    // Step 2: embedded stream
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::Embed);
    tick_until(&mut app, |app| app.embed_view.status().is_ready());

    let player = app.embed_view.embed_player().unwrap();
    assert_eq!(player.borrow().volume, 60);
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(player.borrow().volume, 90);
    press(&mut app, KeyCode::Char('m'));
    assert!(player.borrow().muted);

    // Step 3: break and remount
    press(&mut app, KeyCode::Char('x'));
    app.tick();
    assert!(matches!(app.embed_view.status(), BackendStatus::Error(_)));
    assert!(app.error_message.is_some());

    press(&mut app, KeyCode::Char('r'));
    assert!(app.error_message.is_none());
    tick_until(&mut app, |app| app.embed_view.status().is_ready());
    assert_eq!(app.embed_view.controller().level(), 60);
    assert!(!player.borrow().muted);

    // Step 4: video stories
    press(&mut app, KeyCode::Tab);
    assert!(!app.embed_view.has_backend_instance());
    tick_until(&mut app, |app| app.video_view.status().is_ready());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_view, View::LocalVideo);
    tick_until(&mut app, |app| app.local_video_view.status().is_ready());

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn story_help_round_trip_keeps_player() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    tick_until(&mut app, |app| app.embed_view.status().is_ready());

    press(&mut app, KeyCode::Char('?'));
    app.tick();
    assert!(app.embed_view.status().is_ready());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_view, View::Embed);
    assert!(app.embed_view.has_backend_instance());
}
