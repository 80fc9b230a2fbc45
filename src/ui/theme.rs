//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the volume control widget
pub mod volume_control {
    use super::*;

    /// Filled part of the slider
    pub const SLIDER_FILLED: Color = Color::Green;
    /// Empty part of the slider
    pub const SLIDER_EMPTY: Color = Color::DarkGray;
    /// Slider while muted
    pub const SLIDER_MUTED: Color = Color::DarkGray;
    /// Percentage label
    pub const PERCENTAGE: Color = Color::Gray;
    /// Mute button background
    pub const BUTTON_BG: Color = Color::DarkGray;
}

/// Colors for player panels
pub mod player {
    use super::*;

    /// Loading overlay text
    pub const LOADING: Color = Color::White;
    /// Error overlay text
    pub const ERROR: Color = Color::LightRed;
    /// Error hint text
    pub const ERROR_HINT: Color = Color::Red;
    /// Readout of the backend's actual volume
    pub const READOUT: Color = Color::Cyan;
    /// Info box text
    pub const INFO: Color = Color::Yellow;
}

/// Colors for status badges
pub mod badge {
    use super::*;

    pub const LOADING: Color = Color::Yellow;
    pub const READY: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}

/// Colors for the story tab bar
pub mod tabs {
    use super::*;

    /// Current story
    pub const ACTIVE: Color = Color::Cyan;
    /// Other stories
    pub const INACTIVE: Color = Color::DarkGray;
}
