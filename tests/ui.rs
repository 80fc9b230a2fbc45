//! UI tests using insta and ratatui's TestBackend
//!
//! These tests render into an in-memory terminal and check what ends up
//! on screen.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

#[path = "common/mod.rs"]
mod common;

#[path = "ui/test_help.rs"]
mod test_help;

#[path = "ui/test_volume_control.rs"]
mod test_volume_control;

#[path = "ui/test_player.rs"]
mod test_player;

#[path = "ui/test_app.rs"]
mod test_app;
