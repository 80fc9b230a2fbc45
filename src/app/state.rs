//! Application state and view management

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::media::{BackendStatus, ScriptRegistry};
use crate::model::Notification;
use crate::ui::views::{PlayerKind, PlayerView, PrimaryView};

/// Interval between backend ticks
pub const TICK_RATE: Duration = Duration::from_millis(200);

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Primary,
    Embed,
    Video,
    LocalVideo,
    Help,
}

impl View {
    /// Stories in tab order
    pub const STORIES: [View; 4] = [View::Primary, View::Embed, View::Video, View::LocalVideo];

    pub fn title(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Embed => PlayerKind::Embed.title(),
            Self::Video => PlayerKind::Video.title(),
            Self::LocalVideo => PlayerKind::LocalVideo.title(),
            Self::Help => "Help",
        }
    }

    /// Position in [`View::STORIES`]
    pub fn story_index(self) -> Option<usize> {
        Self::STORIES.iter().position(|&v| v == self)
    }
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    pub config: Config,
    /// Percentage label next to the slider (p key toggle)
    pub show_percentage: bool,
    pub primary_view: PrimaryView,
    pub embed_view: PlayerView,
    pub video_view: PlayerView,
    pub local_video_view: PlayerView,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// When the last backend tick ran
    last_tick: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Construct a new instance of [`App`] sharing the process-wide script
    /// registry.
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, ScriptRegistry::global())
    }

    /// Construct with a dedicated script registry
    pub fn with_registry(config: Config, registry: Arc<ScriptRegistry>) -> Self {
        Self {
            running: true,
            current_view: View::Primary,
            previous_view: None,
            show_percentage: config.show_percentage,
            primary_view: PrimaryView::new(config.initial_volume),
            embed_view: PlayerView::embed(&config.embed, registry),
            video_view: PlayerView::video(PlayerKind::Video, &config.video),
            local_video_view: PlayerView::video(PlayerKind::LocalVideo, &config.local_video),
            config,
            error_message: None,
            notification: None,
            help_scroll: 0,
            last_tick: Instant::now(),
        }
    }

    /// Story in focus: the current view, or the one Help was opened from
    pub fn story(&self) -> View {
        match self.current_view {
            View::Help => self.previous_view.unwrap_or_default(),
            view => view,
        }
    }

    pub(crate) fn player_view(&self, view: View) -> Option<&PlayerView> {
        match view {
            View::Embed => Some(&self.embed_view),
            View::Video => Some(&self.video_view),
            View::LocalVideo => Some(&self.local_video_view),
            View::Primary | View::Help => None,
        }
    }

    pub(crate) fn player_view_mut(&mut self, view: View) -> Option<&mut PlayerView> {
        match view {
            View::Embed => Some(&mut self.embed_view),
            View::Video => Some(&mut self.video_view),
            View::LocalVideo => Some(&mut self.local_video_view),
            View::Primary | View::Help => None,
        }
    }

    /// Switch to the next story (Tab key)
    pub(crate) fn next_story(&mut self) {
        self.shift_story(1);
    }

    /// Switch to the previous story (Shift+Tab)
    pub(crate) fn prev_story(&mut self) {
        self.shift_story(View::STORIES.len() - 1);
    }

    fn shift_story(&mut self, offset: usize) {
        let index = self.story().story_index().unwrap_or(0);
        let next = View::STORIES[(index + offset) % View::STORIES.len()];
        self.go_to_view(next);
    }

    /// Navigate to a specific view. Leaving a story unmounts its player;
    /// entering one mounts it. Help keeps the story behind it mounted.
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view == view {
            return;
        }

        let old_story = self.story();
        self.previous_view = Some(self.current_view);
        self.current_view = view;
        if view == View::Help {
            self.help_scroll = 0;
        }
        self.switch_story(old_story);
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        let old_story = self.story();
        self.current_view = self.previous_view.take().unwrap_or_default();
        self.switch_story(old_story);
    }

    fn switch_story(&mut self, old_story: View) {
        let new_story = self.story();
        if old_story == new_story {
            return;
        }

        if let Some(view) = self.player_view_mut(old_story) {
            view.unmount();
        }
        if let Some(view) = self.player_view_mut(new_story) {
            view.mount();
        }
    }

    /// Idle tick: advance the story's backend and surface status changes
    pub fn tick(&mut self) {
        self.clear_expired_notification();

        let story = self.story();
        let Some(status) = self.player_view_mut(story).and_then(PlayerView::tick) else {
            return;
        };

        let title = story.title();
        match status {
            BackendStatus::Ready => {
                self.notification = Some(Notification::success(format!("{title} ready")));
            }
            BackendStatus::Error(err) => {
                self.error_message = Some(format!("{title}: {err}"));
            }
            BackendStatus::Loading => {}
        }
    }

    /// Time left until the next tick is due, as of `now`
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        TICK_RATE.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Run [`App::tick`] if [`TICK_RATE`] has passed since the last one.
    /// Key input does not postpone ticks.
    pub fn tick_if_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < TICK_RATE {
            return false;
        }
        self.last_tick = now;
        self.tick();
        true
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
