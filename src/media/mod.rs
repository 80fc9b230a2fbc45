//! Media backend layer
//!
//! Adapters translate volume changes into calls on a concrete playback
//! backend. Backend failures stop at the adapter: they are logged and turned
//! into a degraded [`BackendStatus`], never handed back to the widget.

mod embed;
mod script;
pub mod sim;
mod video;

pub use embed::{
    DEFAULT_SCRIPT_SRC, EmbedHost, EmbedPlayer, EmbedPlayerAdapter, EmbedState, MountId,
    PlayerEvent, PlayerEventKind, PlayerOptions,
};
pub use script::{ScriptLease, ScriptRegistry, ScriptStatus};
pub use video::{VideoElement, VideoElementAdapter, VideoEvent};

use thiserror::Error;

use crate::model::VolumeChange;

/// Errors raised by media backends
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("backend is not ready")]
    NotReady,

    #[error("backend handle was destroyed")]
    BackendDestroyed,

    #[error("backend command failed: {0}")]
    Backend(String),

    #[error("failed to load script {src}")]
    ScriptLoad { src: String },

    #[error("player container is no longer attached")]
    ContainerDetached,

    #[error("failed to create player: {0}")]
    PlayerConstruction(String),

    #[error("player reported error code {0}")]
    PlayerError(i32),

    #[error("no playable media source")]
    NoPlayableSource,
}

impl MediaError {
    /// Whether the error only means "try again once the backend is up"
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady | Self::BackendDestroyed)
    }
}

/// Coarse backend status used for badges and overlays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Loading,
    Ready,
    Error(MediaError),
}

impl BackendStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Ready => "Playing",
            Self::Error(_) => "Error",
        }
    }
}

/// Applies volume changes to one playback backend.
///
/// Implementors only provide [`MediaAdapter::try_apply`]; the provided
/// [`MediaAdapter::apply`] is the listener-facing entry point and absorbs
/// every failure.
pub trait MediaAdapter {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    fn status(&self) -> BackendStatus;

    /// Push a change to the backend.
    ///
    /// Returns [`MediaError::NotReady`] without touching the backend when it
    /// is not ready. Nothing is queued for later.
    fn try_apply(&mut self, change: VolumeChange) -> Result<(), MediaError>;

    /// Push a change, logging instead of failing
    fn apply(&mut self, change: VolumeChange) {
        tracing::debug!(
            backend = self.name(),
            volume = change.volume,
            muted = change.muted,
            "volume change"
        );

        match self.try_apply(change) {
            Ok(()) => {}
            Err(err) if err.is_not_ready() => {
                tracing::warn!(backend = self.name(), %err, "backend not ready, change dropped");
            }
            Err(err) => {
                tracing::error!(backend = self.name(), %err, "volume command failed");
            }
        }
    }
}
