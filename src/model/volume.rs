//! Volume state model
//!
//! Level and mute are tracked separately: a level of 0 is not the same
//! thing as being muted.

/// Upper bound of the volume scale
pub const MAX_LEVEL: u8 = 100;

/// Level used when no initial volume is given, and when unmuting would
/// otherwise restore a level of 0
pub const DEFAULT_LEVEL: u8 = 50;

/// Clamp an arbitrary integer onto the 0..=100 volume scale
pub fn clamp_level(level: i32) -> u8 {
    level.clamp(0, i32::from(MAX_LEVEL)) as u8
}

/// Volume level and mute flag owned by one widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeState {
    /// Current level (0-100)
    pub(crate) level: u8,
    /// Mute flag
    pub(crate) muted: bool,
    /// Level captured when mute last switched on
    pub(crate) last_unmuted_level: u8,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self::new(i32::from(DEFAULT_LEVEL))
    }
}

impl VolumeState {
    /// Create a new state, clamping the initial level
    pub fn new(initial_level: i32) -> Self {
        let level = clamp_level(initial_level);
        Self {
            level,
            muted: false,
            last_unmuted_level: level,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn last_unmuted_level(&self) -> u8 {
        self.last_unmuted_level
    }

    /// Derive the icon for the current state
    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::for_state(self.level, self.muted)
    }
}

/// A change notification delivered to the volume listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeChange {
    /// Resulting level (0-100)
    pub volume: u8,
    /// Resulting mute signal
    pub muted: bool,
}

impl VolumeChange {
    pub fn new(volume: u8, muted: bool) -> Self {
        Self { volume, muted }
    }

    /// Volume on the 0.0-1.0 scale used by media elements
    pub fn normalized(&self) -> f64 {
        f64::from(self.volume) / f64::from(MAX_LEVEL)
    }
}

/// Icon shown on the mute button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeIcon {
    /// Levels below this are shown as [`VolumeIcon::Low`]
    pub const LOW_BELOW: u8 = 30;
    /// Levels below this are shown as [`VolumeIcon::Medium`]
    pub const MEDIUM_BELOW: u8 = 70;

    /// Pick the icon for a level/mute pair
    pub fn for_state(level: u8, muted: bool) -> Self {
        if muted || level == 0 {
            Self::Muted
        } else if level < Self::LOW_BELOW {
            Self::Low
        } else if level < Self::MEDIUM_BELOW {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Muted => "🔇",
            Self::Low => "🔈",
            Self::Medium => "🔉",
            Self::High => "🔊",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
