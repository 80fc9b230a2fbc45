//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod notification_banner;
mod player_panel;
mod status_bar;
mod story_tabs;
mod volume_control;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, render_help_panel};
pub use notification_banner::render_notification_banner;
pub use player_panel::{
    PlayerPanel, build_badge_line, build_overlay_lines, build_panel_lines, render_player_panel,
};
pub use status_bar::{build_status_bar, render_status_bar};
pub use story_tabs::{build_story_tabs, render_story_tabs};
pub use volume_control::{build_slider, build_volume_line, filled_cells, render_volume_control};
