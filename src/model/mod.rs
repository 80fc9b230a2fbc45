//! Domain models

mod notification;
mod volume;

pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use volume::{
    DEFAULT_LEVEL, MAX_LEVEL, VolumeChange, VolumeIcon, VolumeState, clamp_level,
};
