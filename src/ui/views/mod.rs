//! View components
//!
//! Each view is one story of the showcase.

mod player;
mod primary;

pub use player::{PlayerAction, PlayerKind, PlayerView};
pub use primary::{CHANGE_LOG_LEN, PrimaryView};

use crate::control::VolumeController;
use crate::keys::VolumeIntent;
use crate::model::VolumeChange;

/// Run one volume intent against a controller
pub(crate) fn apply_intent(
    controller: &mut VolumeController,
    intent: VolumeIntent,
    step: u8,
) -> VolumeChange {
    match intent {
        VolumeIntent::StepUp => controller.step_up(step),
        VolumeIntent::StepDown => controller.step_down(step),
        VolumeIntent::Set(level) => controller.set_volume(level),
        VolumeIntent::ToggleMute => controller.toggle_mute(),
    }
}
