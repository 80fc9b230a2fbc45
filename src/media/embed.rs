//! Embedded player adapter
//!
//! An embedded player needs a shared external script, a mount node inside
//! its container, and an asynchronous "ready" signal before it accepts
//! commands. Readiness is tracked as an explicit state machine:
//!
//! ```text
//! Unstarted -> ScriptLoading -> ScriptReady -> PlayerInitializing -> PlayerReady
//!                   |                               |                    |
//!                   +---------------> Error <-------+--------------------+
//! ```
//!
//! `teardown` returns any state to `Unstarted`.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{BackendStatus, MediaAdapter, MediaError, ScriptLease, ScriptRegistry, ScriptStatus};
use crate::model::{VolumeChange, clamp_level};

/// Default script source for the embedded player API
pub const DEFAULT_SCRIPT_SRC: &str = "https://www.youtube.com/iframe_api";

/// Live handle to one embedded player instance
pub trait EmbedPlayer {
    /// Set the volume on the player's native 0-100 scale
    fn set_volume(&mut self, volume: u8) -> Result<(), MediaError>;
    fn mute(&mut self) -> Result<(), MediaError>;
    fn un_mute(&mut self) -> Result<(), MediaError>;
    fn destroy(&mut self) -> Result<(), MediaError>;
}

/// Document-side services an embedded player needs
pub trait EmbedHost {
    /// Insert the external script into the document
    fn inject_script(&mut self, src: &str) -> Result<(), MediaError>;

    /// Whether the player's container is still part of the document
    fn container_attached(&self) -> bool;

    /// Create the mount node inside the container
    fn insert_mount(&mut self, mount: &MountId) -> Result<(), MediaError>;

    fn remove_mount(&mut self, mount: &MountId) -> Result<(), MediaError>;

    /// Construct a player on a mount node. Readiness arrives later as a
    /// [`PlayerEvent`].
    fn create_player(
        &mut self,
        mount: &MountId,
        options: &PlayerOptions,
    ) -> Result<Box<dyn EmbedPlayer>, MediaError>;

    /// Player callbacks that fired since the last call
    fn drain_events(&mut self) -> Vec<PlayerEvent>;
}

/// Unique id of one mount node (`embed-player-{n}`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountId(String);

impl MountId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(format!("embed-player-{}", NEXT.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Callback fired by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEvent {
    pub mount: MountId,
    pub kind: PlayerEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEventKind {
    Ready,
    /// Opaque error code from the player
    Error(i32),
}

/// Construction options passed to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
    pub video_id: String,
    pub autoplay: bool,
    pub controls: bool,
    pub related_videos: bool,
    pub modest_branding: bool,
    pub fullscreen: bool,
}

impl PlayerOptions {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            autoplay: false,
            controls: true,
            related_videos: false,
            modest_branding: true,
            fullscreen: true,
        }
    }
}

/// Readiness of an embedded player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedState {
    Unstarted,
    ScriptLoading,
    ScriptReady,
    PlayerInitializing,
    PlayerReady,
    Error(MediaError),
}

impl EmbedState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unstarted => "unstarted",
            Self::ScriptLoading => "script loading",
            Self::ScriptReady => "script ready",
            Self::PlayerInitializing => "player initializing",
            Self::PlayerReady => "player ready",
            Self::Error(_) => "error",
        }
    }
}

struct Mount {
    id: MountId,
    player: Option<Box<dyn EmbedPlayer>>,
}

/// [`MediaAdapter`] for an embedded player
pub struct EmbedPlayerAdapter<H: EmbedHost> {
    host: H,
    registry: Arc<ScriptRegistry>,
    script_src: String,
    options: PlayerOptions,
    initial_volume: u8,
    state: EmbedState,
    lease: Option<ScriptLease>,
    mount: Option<Mount>,
    /// Set once a player has been started for the current mount lifecycle
    initialized: bool,
}

impl<H: EmbedHost> fmt::Debug for EmbedPlayerAdapter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbedPlayerAdapter")
            .field("script_src", &self.script_src)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("mount", &self.mount.as_ref().map(|m| &m.id))
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl<H: EmbedHost> EmbedPlayerAdapter<H> {
    pub fn new(
        host: H,
        registry: Arc<ScriptRegistry>,
        options: PlayerOptions,
        initial_volume: i32,
    ) -> Self {
        Self {
            host,
            registry,
            script_src: DEFAULT_SCRIPT_SRC.to_string(),
            options,
            initial_volume: clamp_level(initial_volume),
            state: EmbedState::Unstarted,
            lease: None,
            mount: None,
            initialized: false,
        }
    }

    /// Use a different script source
    pub fn with_script_src(mut self, src: impl Into<String>) -> Self {
        self.script_src = src.into();
        self
    }

    pub fn state(&self) -> &EmbedState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn script_src(&self) -> &str {
        &self.script_src
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Id of the live mount node, if any
    pub fn mount_id(&self) -> Option<&MountId> {
        self.mount.as_ref().map(|m| &m.id)
    }

    /// Start the lifecycle: subscribe to the script and, if it is already
    /// loaded, initialize the player right away. No-op unless `Unstarted`.
    pub fn mount(&mut self) {
        if self.state != EmbedState::Unstarted {
            tracing::debug!(state = self.state.label(), "mount ignored");
            return;
        }

        let host = &mut self.host;
        let lease = self
            .registry
            .subscribe(&self.script_src, |src| host.inject_script(src));
        let status = lease.status();
        self.lease = Some(lease);
        self.state = EmbedState::ScriptLoading;
        self.on_script_status(status);
    }

    /// Re-check the shared script and deliver pending player callbacks.
    /// An initialization postponed by a detached container is retried.
    pub fn pump(&mut self) {
        if self.state == EmbedState::ScriptLoading
            && let Some(status) = self.lease.as_ref().map(ScriptLease::status)
        {
            self.on_script_status(status);
        }
        if self.state == EmbedState::ScriptReady {
            self.initialize();
        }

        for event in self.host.drain_events() {
            self.handle_player_event(event);
        }
    }

    fn on_script_status(&mut self, status: ScriptStatus) {
        match status {
            ScriptStatus::Loading => {}
            ScriptStatus::Ready => {
                tracing::info!(src = %self.script_src, "player script ready");
                self.state = EmbedState::ScriptReady;
                self.initialize();
            }
            ScriptStatus::Failed => {
                self.fail(MediaError::ScriptLoad {
                    src: self.script_src.clone(),
                });
            }
        }
    }

    /// `ScriptReady -> PlayerInitializing`, at most once per mount lifecycle
    fn initialize(&mut self) {
        if self.state != EmbedState::ScriptReady || self.initialized {
            return;
        }
        if !self.host.container_attached() {
            tracing::debug!(err = %MediaError::ContainerDetached, "player initialization postponed");
            return;
        }

        let id = MountId::next();
        if let Err(err) = self.host.insert_mount(&id) {
            self.fail(err);
            return;
        }

        self.initialized = true;
        self.state = EmbedState::PlayerInitializing;
        tracing::info!(mount = %id, video_id = %self.options.video_id, "creating player");

        match self.host.create_player(&id, &self.options) {
            Ok(player) => {
                self.mount = Some(Mount {
                    id,
                    player: Some(player),
                });
            }
            Err(err) => {
                // Construction failed: allow a later retry
                self.initialized = false;
                self.remove_mount_node(&id);
                self.fail(MediaError::PlayerConstruction(err.to_string()));
            }
        }
    }

    /// Handle a player callback. Callbacks for a mount that has been torn
    /// down are ignored.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        let Some(mount) = self.mount.as_mut().filter(|m| m.id == event.mount) else {
            tracing::debug!(mount = %event.mount, "ignoring callback for stale mount");
            return;
        };

        match event.kind {
            PlayerEventKind::Ready => {
                if self.state != EmbedState::PlayerInitializing {
                    return;
                }
                tracing::info!(mount = %mount.id, "player ready");
                if let Some(player) = mount.player.as_mut()
                    && let Err(err) = player.set_volume(self.initial_volume)
                {
                    tracing::warn!(%err, "failed to set initial player volume");
                }
                self.state = EmbedState::PlayerReady;
            }
            PlayerEventKind::Error(code) => {
                self.fail(MediaError::PlayerError(code));
            }
        }
    }

    /// Destroy the player and remove its mount node. Failures are logged and
    /// swallowed. Ends in `Unstarted`.
    pub fn teardown(&mut self) {
        if let Some(mut mount) = self.mount.take() {
            if let Some(mut player) = mount.player.take()
                && let Err(err) = player.destroy()
            {
                tracing::warn!(mount = %mount.id, %err, "error while destroying player");
            }
            self.remove_mount_node(&mount.id);
        }

        self.lease = None;
        self.initialized = false;
        if self.state != EmbedState::Unstarted {
            tracing::debug!(state = self.state.label(), "player torn down");
        }
        self.state = EmbedState::Unstarted;
    }

    /// Tear down and mount again
    pub fn remount(&mut self) {
        self.teardown();
        self.mount();
    }

    fn remove_mount_node(&mut self, id: &MountId) {
        if let Err(err) = self.host.remove_mount(id) {
            tracing::warn!(mount = %id, %err, "error while removing mount node");
        }
    }

    fn fail(&mut self, err: MediaError) {
        tracing::error!(%err, state = self.state.label(), "embedded player error");
        self.state = EmbedState::Error(err);
    }

    fn command(&mut self, change: VolumeChange) -> Result<(), MediaError> {
        let player = self
            .mount
            .as_mut()
            .and_then(|m| m.player.as_mut())
            .ok_or(MediaError::NotReady)?;

        if change.muted {
            player.mute()
        } else {
            player.un_mute()?;
            player.set_volume(change.volume)
        }
    }
}

impl<H: EmbedHost> Drop for EmbedPlayerAdapter<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<H: EmbedHost> MediaAdapter for EmbedPlayerAdapter<H> {
    fn name(&self) -> &'static str {
        "embed"
    }

    fn status(&self) -> BackendStatus {
        match &self.state {
            EmbedState::PlayerReady => BackendStatus::Ready,
            EmbedState::Error(err) => BackendStatus::Error(err.clone()),
            _ => BackendStatus::Loading,
        }
    }

    fn try_apply(&mut self, change: VolumeChange) -> Result<(), MediaError> {
        if self.state != EmbedState::PlayerReady {
            return Err(MediaError::NotReady);
        }

        self.command(change).inspect_err(|err| {
            self.state = EmbedState::Error(err.clone());
        })
    }
}
