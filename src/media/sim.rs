//! Simulated backends
//!
//! In-process stand-ins for a video element and an embedded player. Time
//! advances in ticks driven by the caller (the terminal loop's idle tick),
//! so loading delays and callbacks behave like their asynchronous
//! counterparts without any I/O.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use super::{
    EmbedHost, EmbedPlayer, MediaError, MountId, PlayerEvent, PlayerEventKind, PlayerOptions,
    ScriptRegistry, VideoElement, VideoEvent,
};

/// Ticks before a simulated script or element finishes loading
pub const DEFAULT_LOAD_TICKS: u32 = 3;

/// Whether a source can be played: remote URLs always, local paths when
/// the file exists
pub fn is_playable(src: &str) -> bool {
    src.starts_with("https://") || src.starts_with("http://") || Path::new(src).is_file()
}

// =============================================================================
// Video element
// =============================================================================

/// Simulated media element with source fallback
#[derive(Debug)]
pub struct SimVideoElement {
    sources: Vec<String>,
    active_source: Option<usize>,
    load_ticks: u32,
    loaded: bool,
    failed: bool,
    volume: f64,
    muted: bool,
    commands: usize,
}

impl SimVideoElement {
    pub fn new(sources: Vec<String>, load_ticks: u32) -> Self {
        Self {
            sources,
            active_source: None,
            load_ticks,
            loaded: false,
            failed: false,
            volume: 1.0,
            muted: false,
            commands: 0,
        }
    }

    /// Advance one tick. Returns the lifecycle event produced, if any.
    pub fn tick(&mut self) -> Option<VideoEvent> {
        if self.loaded || self.failed {
            return None;
        }
        if self.load_ticks > 0 {
            self.load_ticks -= 1;
            return None;
        }

        match self.sources.iter().position(|src| is_playable(src)) {
            Some(index) => {
                self.active_source = Some(index);
                self.loaded = true;
                Some(VideoEvent::LoadedData)
            }
            None => {
                self.failed = true;
                Some(VideoEvent::Error(MediaError::NoPlayableSource))
            }
        }
    }

    /// Break playback (decoder crash, network drop)
    pub fn break_playback(&mut self) -> VideoEvent {
        self.failed = true;
        VideoEvent::Error(MediaError::Backend("media decode error".to_string()))
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn active_source(&self) -> Option<&str> {
        self.active_source
            .and_then(|i| self.sources.get(i))
            .map(String::as_str)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of commands accepted so far
    pub fn commands(&self) -> usize {
        self.commands
    }

    fn check_alive(&self) -> Result<(), MediaError> {
        if self.failed {
            Err(MediaError::Backend("media element is in an error state".to_string()))
        } else {
            Ok(())
        }
    }
}

impl VideoElement for SimVideoElement {
    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError> {
        self.check_alive()?;
        if !(0.0..=1.0).contains(&volume) {
            return Err(MediaError::Backend(format!(
                "volume {volume} outside [0, 1]"
            )));
        }
        self.volume = volume;
        self.commands += 1;
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) -> Result<(), MediaError> {
        self.check_alive()?;
        self.muted = muted;
        self.commands += 1;
        Ok(())
    }
}

// =============================================================================
// Embedded player
// =============================================================================

/// Observable state of the simulated embedded player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimPlayerState {
    pub video_id: String,
    pub volume: u8,
    pub muted: bool,
    pub alive: bool,
    pub commands: usize,
}

/// Failure switches for [`SimEmbedHost`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimEmbedFaults {
    pub script_fails: bool,
    pub construction_fails: bool,
    pub container_detached: bool,
}

/// Player handle backed by [`SimPlayerState`]
#[derive(Debug)]
pub struct SimEmbedPlayer {
    state: Rc<RefCell<SimPlayerState>>,
}

impl SimEmbedPlayer {
    fn with_state<F>(&mut self, f: F) -> Result<(), MediaError>
    where
        F: FnOnce(&mut SimPlayerState),
    {
        let mut state = self.state.borrow_mut();
        if !state.alive {
            return Err(MediaError::BackendDestroyed);
        }
        f(&mut state);
        state.commands += 1;
        Ok(())
    }
}

impl EmbedPlayer for SimEmbedPlayer {
    fn set_volume(&mut self, volume: u8) -> Result<(), MediaError> {
        self.with_state(|s| s.volume = volume)
    }

    fn mute(&mut self) -> Result<(), MediaError> {
        self.with_state(|s| s.muted = true)
    }

    fn un_mute(&mut self) -> Result<(), MediaError> {
        self.with_state(|s| s.muted = false)
    }

    fn destroy(&mut self) -> Result<(), MediaError> {
        let mut state = self.state.borrow_mut();
        if !state.alive {
            return Err(MediaError::BackendDestroyed);
        }
        state.alive = false;
        Ok(())
    }
}

/// Simulated document shared by every embedded player on a page.
///
/// Script loading belongs to the document, not to the player that
/// injected the script: any host draining events advances every pending
/// script, so a subscriber still reaches readiness after the injecting
/// player is torn down.
#[derive(Debug)]
pub struct SimDocument {
    registry: Arc<ScriptRegistry>,
    pending_scripts: RefCell<HashMap<String, u32>>,
}

impl SimDocument {
    /// `registry` must be the one adapters on this document subscribe to:
    /// scripts report readiness there.
    pub fn new(registry: Arc<ScriptRegistry>) -> Rc<Self> {
        Rc::new(Self {
            registry,
            pending_scripts: RefCell::new(HashMap::new()),
        })
    }

    pub fn registry(&self) -> &Arc<ScriptRegistry> {
        &self.registry
    }

    /// Number of scripts still loading
    pub fn pending_scripts(&self) -> usize {
        self.pending_scripts.borrow().len()
    }

    fn load_script(&self, src: &str, ticks: u32) {
        self.pending_scripts.borrow_mut().insert(src.to_string(), ticks);
    }

    /// Advance every pending script by one tick
    pub fn advance(&self) {
        let mut ready = Vec::new();
        self.pending_scripts.borrow_mut().retain(|src, left| {
            // Forgotten by the registry: nobody is waiting any more
            if self.registry.status(src).is_none() {
                return false;
            }
            if *left == 0 {
                ready.push(src.clone());
                return false;
            }
            *left -= 1;
            true
        });

        for src in ready {
            self.registry.mark_ready(&src);
        }
    }
}

/// Simulated host for one embedded player inside a [`SimDocument`]
#[derive(Debug)]
pub struct SimEmbedHost {
    document: Rc<SimDocument>,
    faults: SimEmbedFaults,
    script_ticks: u32,
    player_ticks: u32,
    pending_ready: Option<(MountId, u32)>,
    mounts: Vec<MountId>,
    events: Vec<PlayerEvent>,
    player: Rc<RefCell<SimPlayerState>>,
}

impl SimEmbedHost {
    pub fn new(document: &Rc<SimDocument>) -> Self {
        Self {
            document: Rc::clone(document),
            faults: SimEmbedFaults::default(),
            script_ticks: DEFAULT_LOAD_TICKS,
            player_ticks: DEFAULT_LOAD_TICKS,
            pending_ready: None,
            mounts: Vec::new(),
            events: Vec::new(),
            player: Rc::new(RefCell::new(SimPlayerState::default())),
        }
    }

    pub fn with_faults(mut self, faults: SimEmbedFaults) -> Self {
        self.faults = faults;
        self
    }

    /// Loading delays for a script this host injects and for player
    /// readiness
    pub fn with_ticks(mut self, script_ticks: u32, player_ticks: u32) -> Self {
        self.script_ticks = script_ticks;
        self.player_ticks = player_ticks;
        self
    }

    pub fn faults_mut(&mut self) -> &mut SimEmbedFaults {
        &mut self.faults
    }

    pub fn document(&self) -> &Rc<SimDocument> {
        &self.document
    }

    /// Shared view of the player state, for display
    pub fn player_state(&self) -> Rc<RefCell<SimPlayerState>> {
        Rc::clone(&self.player)
    }

    /// Mount nodes currently in the container
    pub fn mounts(&self) -> &[MountId] {
        &self.mounts
    }

    /// Make the newest player report an error on the next drain
    pub fn raise_error(&mut self, code: i32) {
        if let Some(mount) = self.mounts.last() {
            self.events.push(PlayerEvent {
                mount: mount.clone(),
                kind: PlayerEventKind::Error(code),
            });
        }
    }

    fn advance(&mut self) {
        self.document.advance();

        if let Some((mount, left)) = self.pending_ready.take() {
            if left == 0 {
                self.events.push(PlayerEvent {
                    mount,
                    kind: PlayerEventKind::Ready,
                });
            } else {
                self.pending_ready = Some((mount, left - 1));
            }
        }
    }
}

impl EmbedHost for SimEmbedHost {
    fn inject_script(&mut self, src: &str) -> Result<(), MediaError> {
        if self.faults.script_fails {
            return Err(MediaError::ScriptLoad {
                src: src.to_string(),
            });
        }
        self.document.load_script(src, self.script_ticks);
        Ok(())
    }

    fn container_attached(&self) -> bool {
        !self.faults.container_detached
    }

    fn insert_mount(&mut self, mount: &MountId) -> Result<(), MediaError> {
        self.mounts.push(mount.clone());
        Ok(())
    }

    fn remove_mount(&mut self, mount: &MountId) -> Result<(), MediaError> {
        let index = self
            .mounts
            .iter()
            .position(|m| m == mount)
            .ok_or_else(|| MediaError::Backend(format!("no mount node {mount}")))?;
        self.mounts.remove(index);
        Ok(())
    }

    fn create_player(
        &mut self,
        mount: &MountId,
        options: &PlayerOptions,
    ) -> Result<Box<dyn EmbedPlayer>, MediaError> {
        if self.faults.construction_fails {
            return Err(MediaError::Backend("player API rejected options".to_string()));
        }

        // Fresh state per instance; the old handle keeps nothing alive
        self.player.replace(SimPlayerState {
            video_id: options.video_id.clone(),
            volume: 100,
            muted: false,
            alive: true,
            commands: 0,
        });
        self.pending_ready = Some((mount.clone(), self.player_ticks));

        Ok(Box::new(SimEmbedPlayer {
            state: Rc::clone(&self.player),
        }))
    }

    fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.advance();
        std::mem::take(&mut self.events)
    }
}
