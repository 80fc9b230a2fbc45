//! Volume control state machine

mod controller;

pub use controller::{VolumeController, VolumeListener};
