//! Notification model
//!
//! Short-lived feedback shown above the status bar (backend readiness,
//! remounts, ignored commands).

use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Backend became ready, remount finished (green)
    Success,
    /// Informational (cyan)
    Info,
    /// Command dropped or backend degraded (yellow)
    Warning,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success:",
            Self::Info => "Info:",
            Self::Warning => "Warning:",
        }
    }
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Check if the notification has outlived [`NOTIFICATION_TTL`]
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kinds() {
        assert_eq!(
            Notification::success("ready").kind,
            NotificationKind::Success
        );
        assert_eq!(Notification::info("fyi").kind, NotificationKind::Info);
        assert_eq!(
            Notification::warning("not ready").kind,
            NotificationKind::Warning
        );
    }

    #[test]
    fn test_notification_not_expired_immediately() {
        let n = Notification::info("Player remounted");
        assert!(!n.is_expired());
        assert_eq!(n.message, "Player remounted");
    }

    #[test]
    fn test_notification_expires() {
        let mut n = Notification::info("old");
        if let Some(past) = Instant::now().checked_sub(NOTIFICATION_TTL) {
            n.created_at = past;
            assert!(n.is_expired());
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(NotificationKind::Success.label(), "Success:");
        assert_eq!(NotificationKind::Warning.label(), "Warning:");
    }
}
