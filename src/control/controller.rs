//! Volume controller
//!
//! Owns a [`VolumeState`] and turns user intents (set a level, toggle mute)
//! into state updates plus exactly one listener notification per call.

use std::fmt;

use crate::model::{DEFAULT_LEVEL, VolumeChange, VolumeIcon, VolumeState, clamp_level};

/// Change listener invoked synchronously after every operation.
///
/// The controller does not guard against re-entrancy: a listener must not
/// call back into the controller that owns it.
pub type VolumeListener = Box<dyn FnMut(VolumeChange)>;

/// State machine behind the volume control widget
pub struct VolumeController {
    state: VolumeState,
    listener: Option<VolumeListener>,
}

impl fmt::Debug for VolumeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeController")
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for VolumeController {
    fn default() -> Self {
        Self::new(i32::from(DEFAULT_LEVEL))
    }
}

impl VolumeController {
    /// Create a controller with an initial level (clamped)
    pub fn new(initial_level: i32) -> Self {
        Self {
            state: VolumeState::new(initial_level),
            listener: None,
        }
    }

    /// Register the change listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl FnMut(VolumeChange) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn state(&self) -> &VolumeState {
        &self.state
    }

    pub fn level(&self) -> u8 {
        self.state.level
    }

    pub fn is_muted(&self) -> bool {
        self.state.muted
    }

    /// Set the volume level.
    ///
    /// A positive level clears mute. The reported mute signal is
    /// `was_muted && level == 0`, so setting 0 while unmuted reports
    /// `(0, false)`.
    pub fn set_volume(&mut self, new_level: i32) -> VolumeChange {
        let level = clamp_level(new_level);
        let was_muted = self.state.muted;

        self.state.level = level;
        if level > 0 && was_muted {
            self.state.muted = false;
        }

        let change = VolumeChange::new(level, was_muted && level == 0);
        self.notify(change);
        change
    }

    /// Flip the mute flag.
    ///
    /// Muting saves the current level and drops the level to 0. Unmuting
    /// restores the saved level, or [`DEFAULT_LEVEL`] when the saved level
    /// is 0.
    pub fn toggle_mute(&mut self) -> VolumeChange {
        let change = if self.state.muted {
            let restored = if self.state.last_unmuted_level > 0 {
                self.state.last_unmuted_level
            } else {
                DEFAULT_LEVEL
            };
            self.state.muted = false;
            self.state.level = restored;
            VolumeChange::new(restored, false)
        } else {
            self.state.last_unmuted_level = self.state.level;
            self.state.muted = true;
            self.state.level = 0;
            VolumeChange::new(0, true)
        };

        self.notify(change);
        change
    }

    /// Raise the level by `delta` (one `set_volume` call)
    pub fn step_up(&mut self, delta: u8) -> VolumeChange {
        self.set_volume(i32::from(self.state.level) + i32::from(delta))
    }

    /// Lower the level by `delta` (one `set_volume` call)
    pub fn step_down(&mut self, delta: u8) -> VolumeChange {
        self.set_volume(i32::from(self.state.level) - i32::from(delta))
    }

    pub fn icon(&self) -> VolumeIcon {
        self.state.icon()
    }

    /// Text shown next to the slider
    pub fn percentage_label(&self) -> String {
        if self.state.muted {
            "Muted".to_string()
        } else {
            format!("{}%", self.state.level)
        }
    }

    /// Action offered by the mute button
    pub fn mute_action_label(&self) -> &'static str {
        if self.state.muted { "Unmute" } else { "Mute" }
    }

    fn notify(&mut self, change: VolumeChange) {
        if let Some(listener) = self.listener.as_mut() {
            listener(change);
        }
    }
}
