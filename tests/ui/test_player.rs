//! Render tests for the player stories

use std::sync::Arc;

use ratatui::{Terminal, backend::TestBackend};

use volstage::config::VideoConfig;
use volstage::media::ScriptRegistry;
use volstage::ui::views::{PlayerKind, PlayerView};

use crate::common::{fast_config, screen_contains};

fn draw(view: &PlayerView) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), true))
        .unwrap();
    terminal
}

fn embed_view() -> PlayerView {
    PlayerView::embed(&fast_config().embed, Arc::new(ScriptRegistry::new()))
}

#[test]
fn test_embed_loading_overlay() {
    let mut view = embed_view();
    view.mount();

    let terminal = draw(&view);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "LIVE Embedded Stream  [Loading]"));
    assert!(screen_contains(backend, "Loading stream..."));
    assert!(screen_contains(backend, "script loading"));
    assert!(screen_contains(backend, "Video id: dQw4w9WgXcQ"));
}

#[test]
fn test_embed_ready_readout() {
    let mut view = embed_view();
    view.mount();
    view.tick();
    view.tick();

    let terminal = draw(&view);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "[Playing]"));
    assert!(screen_contains(backend, "backend volume 60"));
    assert!(screen_contains(backend, "player ready · embed-player-"));
    assert!(!screen_contains(backend, "Loading stream..."));
}

#[test]
fn test_embed_error_overlay() {
    let mut view = embed_view();
    view.mount();
    view.tick();
    view.tick();
    view.fail();
    view.tick();

    let terminal = draw(&view);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "[Error]"));
    assert!(screen_contains(backend, "player reported error code 150"));
    assert!(screen_contains(backend, "Press r to remount the player"));
    // The control stays usable
    assert!(screen_contains(backend, "60%"));
}

#[test]
fn test_video_sources_listed() {
    let config = VideoConfig {
        sources: vec![
            "https://cdn.example/a.mp4".to_string(),
            "https://cdn.example/b.mp4".to_string(),
        ],
        initial_volume: 70,
        load_ticks: 0,
    };
    let mut view = PlayerView::video(PlayerKind::Video, &config);
    view.mount();
    view.tick();

    let terminal = draw(&view);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "Source 1: https://cdn.example/a.mp4"));
    assert!(screen_contains(backend, "source: https://cdn.example/a.mp4"));
    assert!(screen_contains(backend, "backend volume 0.70"));
}

#[test]
fn test_local_video_guide() {
    let mut view = PlayerView::video(PlayerKind::LocalVideo, &fast_config().local_video);
    view.mount();

    let terminal = draw(&view);
    let backend = terminal.backend();
    assert!(screen_contains(backend, "Using a local MP4 file"));
    assert!(screen_contains(backend, "public/my-video.mp4"));
}
