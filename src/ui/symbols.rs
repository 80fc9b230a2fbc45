//! UI symbols (slider cells, badges, overlays)

/// Slider cells
pub mod slider {
    /// Filled cell
    pub const FILLED: char = '█';
    /// Empty cell
    pub const EMPTY: char = '░';
}

/// Status badge markers
pub mod badge {
    /// Live indicator
    pub const LIVE: &str = "●";
}

/// Overlay icons
pub mod overlay {
    pub const LOADING: &str = "⟳";
    pub const ERROR: &str = "✗";
}
