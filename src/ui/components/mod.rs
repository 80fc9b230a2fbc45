//! Styled pieces shared by the story views and banner widgets
//!
//! Panels, the empty change log and the error/notification lines.

pub mod blocks;
pub mod empty_state;
pub mod message;

pub use blocks::panel_block;
pub use empty_state::{empty_state, no_changes_state};
pub use message::{build_error_line, build_notification_line};
