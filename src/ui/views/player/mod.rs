//! Player stories
//!
//! A volume control wired to a simulated playback backend. The controller's
//! listener forwards every change to the backend's adapter; the idle tick
//! advances the backend so readiness arrives asynchronously.

mod input;
mod render;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::{EmbedConfig, VideoConfig};
use crate::control::VolumeController;
use crate::media::sim::{SimDocument, SimEmbedHost, SimPlayerState, SimVideoElement};
use crate::media::{
    BackendStatus, EmbedPlayerAdapter, MediaAdapter, PlayerOptions, ScriptRegistry,
    VideoElementAdapter,
};

/// Error code raised by the `x` key on embedded players (embedding refused)
pub const EMBED_FAILURE_CODE: i32 = 150;

/// Which story a player view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Embed,
    Video,
    LocalVideo,
}

impl PlayerKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Embed => "Embedded Stream",
            Self::Video => "Video Stream",
            Self::LocalVideo => "Local Video",
        }
    }
}

/// Action returned from PlayerView key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    None,
    /// Tear the player down and mount it again
    Remount,
    /// Make the backend fail
    Fail,
}

#[derive(Debug)]
pub(super) enum Backend {
    Embed {
        adapter: Rc<RefCell<EmbedPlayerAdapter<SimEmbedHost>>>,
        player: Rc<RefCell<SimPlayerState>>,
    },
    Video {
        adapter: Rc<RefCell<VideoElementAdapter>>,
        /// Owned element; the adapter only holds a weak reference
        element: Option<Rc<RefCell<SimVideoElement>>>,
        sources: Vec<String>,
        load_ticks: u32,
    },
}

/// Player story state
#[derive(Debug)]
pub struct PlayerView {
    kind: PlayerKind,
    initial_volume: i32,
    pub(super) controller: VolumeController,
    pub(super) backend: Backend,
    last_status: BackendStatus,
}

/// Forward every controller change to `adapter`
fn connect<A: MediaAdapter + 'static>(controller: &mut VolumeController, adapter: &Rc<RefCell<A>>) {
    let adapter = Rc::clone(adapter);
    controller.set_listener(move |change| match adapter.try_borrow_mut() {
        Ok(mut adapter) => adapter.apply(change),
        Err(_) => tracing::warn!("adapter busy, volume change dropped"),
    });
}

impl PlayerView {
    /// Embedded player story. Starts unmounted.
    pub fn embed(config: &EmbedConfig, registry: Arc<ScriptRegistry>) -> Self {
        let host = SimEmbedHost::new(&SimDocument::new(Arc::clone(&registry)))
            .with_ticks(config.load_ticks, config.load_ticks);
        let player = host.player_state();
        let adapter = EmbedPlayerAdapter::new(
            host,
            registry,
            PlayerOptions::new(config.video_id.clone()),
            config.initial_volume,
        )
        .with_script_src(config.script_src.clone());

        Self::with_backend(
            PlayerKind::Embed,
            config.initial_volume,
            Backend::Embed {
                adapter: Rc::new(RefCell::new(adapter)),
                player,
            },
        )
    }

    /// Video element story. Starts unmounted.
    pub fn video(kind: PlayerKind, config: &VideoConfig) -> Self {
        Self::with_backend(
            kind,
            config.initial_volume,
            Backend::Video {
                adapter: Rc::new(RefCell::new(VideoElementAdapter::detached(
                    config.initial_volume,
                ))),
                element: None,
                sources: config.sources.clone(),
                load_ticks: config.load_ticks,
            },
        )
    }

    fn with_backend(kind: PlayerKind, initial_volume: i32, backend: Backend) -> Self {
        let mut view = Self {
            kind,
            initial_volume,
            controller: VolumeController::new(initial_volume),
            backend,
            last_status: BackendStatus::Loading,
        };
        view.wire();
        view
    }

    fn wire(&mut self) {
        match &self.backend {
            Backend::Embed { adapter, .. } => connect(&mut self.controller, adapter),
            Backend::Video { adapter, .. } => connect(&mut self.controller, adapter),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn controller(&self) -> &VolumeController {
        &self.controller
    }

    /// Current backend status
    pub fn status(&self) -> BackendStatus {
        match &self.backend {
            Backend::Embed { adapter, .. } => adapter.borrow().status(),
            Backend::Video { adapter, .. } => adapter.borrow().status(),
        }
    }

    /// Whether a player or element instance currently exists.
    ///
    /// An embed story holding a script lease while the script loads has no
    /// instance yet: this turns true once its mount node is inserted.
    pub fn has_backend_instance(&self) -> bool {
        match &self.backend {
            Backend::Embed { adapter, .. } => adapter.borrow().mount_id().is_some(),
            Backend::Video { element, .. } => element.is_some(),
        }
    }

    /// Shared embedded player state, for embed stories
    pub fn embed_player(&self) -> Option<Rc<RefCell<SimPlayerState>>> {
        match &self.backend {
            Backend::Embed { player, .. } => Some(Rc::clone(player)),
            Backend::Video { .. } => None,
        }
    }

    /// The live video element, for video stories
    pub fn video_element(&self) -> Option<Rc<RefCell<SimVideoElement>>> {
        match &self.backend {
            Backend::Video { element, .. } => element.clone(),
            Backend::Embed { .. } => None,
        }
    }

    /// Start the backend. The control starts over at its initial volume.
    pub fn mount(&mut self) {
        tracing::info!(story = self.title(), "mounting player");
        self.controller = VolumeController::new(self.initial_volume);
        self.wire();

        match &mut self.backend {
            Backend::Embed { adapter, .. } => adapter.borrow_mut().mount(),
            Backend::Video {
                adapter,
                element,
                sources,
                load_ticks,
            } => {
                let new_element =
                    Rc::new(RefCell::new(SimVideoElement::new(sources.clone(), *load_ticks)));
                adapter.borrow_mut().attach(&new_element);
                *element = Some(new_element);
            }
        }
        self.last_status = self.status();
    }

    /// Drop the backend
    pub fn unmount(&mut self) {
        tracing::info!(story = self.title(), "unmounting player");
        match &mut self.backend {
            Backend::Embed { adapter, .. } => adapter.borrow_mut().teardown(),
            Backend::Video {
                adapter, element, ..
            } => {
                *element = None;
                adapter.borrow_mut().detach();
            }
        }
        self.last_status = self.status();
    }

    pub fn remount(&mut self) {
        self.unmount();
        self.mount();
    }

    /// Make the backend fail. Embedded players report the error on the
    /// next tick; video elements fail right away.
    pub fn fail(&mut self) {
        match &mut self.backend {
            Backend::Embed { adapter, .. } => {
                adapter.borrow_mut().host_mut().raise_error(EMBED_FAILURE_CODE);
            }
            Backend::Video {
                adapter, element, ..
            } => {
                let event = element.as_ref().map(|e| e.borrow_mut().break_playback());
                if let Some(event) = event {
                    adapter.borrow_mut().handle_event(event);
                }
            }
        }
    }

    /// Advance the backend one tick. Returns the new status when it changed.
    pub fn tick(&mut self) -> Option<BackendStatus> {
        match &mut self.backend {
            Backend::Embed { adapter, .. } => adapter.borrow_mut().pump(),
            Backend::Video {
                adapter, element, ..
            } => {
                let event = element.as_ref().and_then(|e| e.borrow_mut().tick());
                if let Some(event) = event {
                    adapter.borrow_mut().handle_event(event);
                }
            }
        }

        let status = self.status();
        if status == self.last_status {
            return None;
        }
        self.last_status = status.clone();
        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::media::{EmbedState, MediaError};

    fn embed_view() -> PlayerView {
        let config = EmbedConfig {
            load_ticks: 0,
            ..EmbedConfig::default()
        };
        PlayerView::embed(&config, Arc::new(ScriptRegistry::new()))
    }

    fn video_view(sources: Vec<String>) -> PlayerView {
        let config = VideoConfig {
            sources,
            initial_volume: 70,
            load_ticks: 0,
        };
        PlayerView::video(PlayerKind::Video, &config)
    }

    fn tick_until_ready(view: &mut PlayerView) {
        for _ in 0..10 {
            view.tick();
            if view.status().is_ready() {
                return;
            }
        }
        panic!("player never became ready: {:?}", view.status());
    }

    #[test]
    fn test_embed_starts_unmounted() {
        let view = embed_view();
        assert!(!view.has_backend_instance());
        assert_eq!(view.status(), BackendStatus::Loading);
    }

    #[test]
    fn test_embed_ready_receives_changes() {
        let mut view = embed_view();
        view.mount();
        tick_until_ready(&mut view);

        let player = view.embed_player().unwrap();
        assert_eq!(player.borrow().volume, 60);

        view.controller.set_volume(25);
        assert_eq!(player.borrow().volume, 25);

        view.controller.toggle_mute();
        assert!(player.borrow().muted);
        assert_eq!(player.borrow().volume, 25);
    }

    #[test]
    fn test_changes_before_ready_are_dropped() {
        let mut view = embed_view();
        view.mount();
        view.controller.set_volume(10);
        tick_until_ready(&mut view);

        // Only the initial volume reached the player
        assert_eq!(view.embed_player().unwrap().borrow().volume, 60);
        assert_eq!(view.controller().level(), 10);
    }

    #[test]
    fn test_tick_reports_status_changes_once() {
        let mut view = video_view(vec!["https://cdn.example/a.mp4".into()]);
        view.mount();
        assert_eq!(view.tick(), Some(BackendStatus::Ready));
        assert_eq!(view.tick(), None);
    }

    #[test]
    fn test_video_fail_moves_to_error() {
        let mut view = video_view(vec!["https://cdn.example/a.mp4".into()]);
        view.mount();
        tick_until_ready(&mut view);

        view.fail();
        assert!(matches!(view.status(), BackendStatus::Error(_)));

        // Commands after the error are no-ops
        view.controller.set_volume(90);
        let element = view.video_element().unwrap();
        assert_eq!(element.borrow().volume(), 0.7);
    }

    #[test]
    fn test_video_without_sources_errors() {
        let mut view = video_view(vec!["/missing/clip.mp4".into()]);
        view.mount();
        assert_eq!(
            view.tick(),
            Some(BackendStatus::Error(MediaError::NoPlayableSource))
        );
    }

    #[test]
    fn test_embed_fail_then_remount() {
        let mut view = embed_view();
        view.mount();
        tick_until_ready(&mut view);

        view.fail();
        assert_eq!(
            view.tick(),
            Some(BackendStatus::Error(MediaError::PlayerError(EMBED_FAILURE_CODE)))
        );

        view.remount();
        assert!(view.has_backend_instance());
        tick_until_ready(&mut view);
    }

    #[test]
    fn test_embed_has_no_instance_while_script_loads() {
        let config = EmbedConfig {
            load_ticks: 2,
            ..EmbedConfig::default()
        };
        let mut view = PlayerView::embed(&config, Arc::new(ScriptRegistry::new()));
        view.mount();

        let Backend::Embed { adapter, .. } = &view.backend else {
            panic!("expected embed backend");
        };
        assert_eq!(adapter.borrow().state(), &EmbedState::ScriptLoading);
        assert!(!view.has_backend_instance());

        for _ in 0..10 {
            if view.has_backend_instance() {
                break;
            }
            view.tick();
        }
        assert!(view.has_backend_instance());
        assert_eq!(view.status(), BackendStatus::Loading);
    }

    #[test]
    fn test_unmount_releases_backend() {
        let mut view = video_view(vec!["https://cdn.example/a.mp4".into()]);
        view.mount();
        tick_until_ready(&mut view);

        view.unmount();
        assert!(!view.has_backend_instance());
        assert_eq!(view.status(), BackendStatus::Loading);
        // Changes while unmounted are dropped without panicking
        view.controller.set_volume(10);
    }

    #[test]
    fn test_mount_resets_controller() {
        let mut view = video_view(vec!["https://cdn.example/a.mp4".into()]);
        view.mount();
        view.controller.set_volume(5);
        view.remount();
        assert_eq!(view.controller().level(), 70);
    }

    #[test]
    fn test_embed_unmount_tears_down() {
        let mut view = embed_view();
        view.mount();
        tick_until_ready(&mut view);
        let player = view.embed_player().unwrap();

        view.unmount();
        assert!(!player.borrow().alive);
        if let Backend::Embed { adapter, .. } = &view.backend {
            assert_eq!(adapter.borrow().state(), &EmbedState::Unstarted);
        }
    }

    #[test]
    fn test_local_video_falls_back_to_remote() {
        let config = Config::default();
        let mut view = PlayerView::video(PlayerKind::LocalVideo, &config.local_video);
        view.mount();
        for _ in 0..10 {
            view.tick();
        }
        let element = view.video_element().unwrap();
        // No public/my-video.mp4 in the test environment
        assert!(element
            .borrow()
            .active_source()
            .is_some_and(|src| src.starts_with("https://")));
    }
}
