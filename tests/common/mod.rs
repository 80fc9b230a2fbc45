//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;

use volstage::app::App;
use volstage::config::{Config, EmbedConfig, VideoConfig};
use volstage::media::ScriptRegistry;

/// Config whose simulated backends load without delay
pub fn fast_config() -> Config {
    let defaults = Config::default();
    Config {
        embed: EmbedConfig {
            load_ticks: 0,
            ..defaults.embed.clone()
        },
        video: VideoConfig {
            load_ticks: 0,
            ..defaults.video.clone()
        },
        local_video: VideoConfig {
            load_ticks: 0,
            ..defaults.local_video.clone()
        },
        ..defaults
    }
}

/// App with its own script registry, so tests do not share script state
pub fn test_app() -> App {
    App::with_registry(fast_config(), Arc::new(ScriptRegistry::new()))
}

pub fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Tick until `done` holds, failing after a generous bound
pub fn tick_until(app: &mut App, done: impl Fn(&App) -> bool) {
    for _ in 0..20 {
        if done(app) {
            return;
        }
        app.tick();
    }
    assert!(done(app), "condition not reached after 20 ticks");
}

/// Rendered buffer as one string per row, trailing spaces trimmed
pub fn buffer_lines(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Whether any rendered row contains `needle`
pub fn screen_contains(backend: &TestBackend, needle: &str) -> bool {
    buffer_lines(backend).iter().any(|line| line.contains(needle))
}
