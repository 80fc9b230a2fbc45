//! Video element adapter
//!
//! Drives a media element that exposes a writable `volume` on the 0.0-1.0
//! scale and a writable `muted` flag. The adapter only holds a weak
//! reference: the element belongs to whoever rendered it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{BackendStatus, MediaAdapter, MediaError};
use crate::model::{MAX_LEVEL, VolumeChange, clamp_level};

/// Live media element handle
pub trait VideoElement {
    /// Set the volume on the 0.0-1.0 scale
    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError>;

    fn set_muted(&mut self, muted: bool) -> Result<(), MediaError>;
}

/// Lifecycle events reported by the element
#[derive(Debug, Clone, PartialEq)]
pub enum VideoEvent {
    /// First frame is available; the element accepts commands
    LoadedData,
    /// Every source failed or playback broke
    Error(MediaError),
}

/// [`super::MediaAdapter`] for a video element
#[derive(Debug)]
pub struct VideoElementAdapter {
    element: Weak<RefCell<dyn VideoElement>>,
    status: BackendStatus,
    initial_volume: u8,
}

impl VideoElementAdapter {
    /// Adapter with no element yet
    pub fn detached(initial_volume: i32) -> Self {
        Self {
            element: Weak::<RefCell<NoElement>>::new(),
            status: BackendStatus::Loading,
            initial_volume: clamp_level(initial_volume),
        }
    }

    /// Adapter bound to an element that is still loading
    pub fn new<V: VideoElement + 'static>(element: &Rc<RefCell<V>>, initial_volume: i32) -> Self {
        let mut adapter = Self::detached(initial_volume);
        adapter.attach(element);
        adapter
    }

    /// Bind to a (new) element and wait for it to load again
    pub fn attach<V: VideoElement + 'static>(&mut self, element: &Rc<RefCell<V>>) {
        let element: Rc<RefCell<dyn VideoElement>> = element.clone();
        self.element = Rc::downgrade(&element);
        self.status = BackendStatus::Loading;
    }

    /// Forget the element
    pub fn detach(&mut self) {
        self.element = Weak::<RefCell<NoElement>>::new();
        self.status = BackendStatus::Loading;
    }

    pub fn initial_volume(&self) -> u8 {
        self.initial_volume
    }

    /// Feed an element lifecycle event
    pub fn handle_event(&mut self, event: VideoEvent) {
        match event {
            VideoEvent::LoadedData => {
                let Some(element) = self.element.upgrade() else {
                    tracing::warn!("video loaded but element is gone");
                    return;
                };
                tracing::info!("video loaded");
                self.status = BackendStatus::Ready;

                let volume = f64::from(self.initial_volume) / f64::from(MAX_LEVEL);
                let pushed = element
                    .try_borrow_mut()
                    .map_err(|_| MediaError::Backend("element is busy".to_string()))
                    .and_then(|mut element| element.set_volume(volume));
                if let Err(err) = pushed {
                    tracing::warn!(%err, "failed to set initial video volume");
                }
            }
            VideoEvent::Error(err) => {
                tracing::error!(%err, "video element error");
                self.status = BackendStatus::Error(err);
            }
        }
    }

    fn command(&self, change: VolumeChange) -> Result<(), MediaError> {
        let element = self.element.upgrade().ok_or(MediaError::BackendDestroyed)?;
        let mut element = element
            .try_borrow_mut()
            .map_err(|_| MediaError::Backend("element is busy".to_string()))?;

        if change.muted {
            element.set_muted(true)
        } else {
            element.set_muted(false)?;
            element.set_volume(change.normalized())
        }
    }
}

impl MediaAdapter for VideoElementAdapter {
    fn name(&self) -> &'static str {
        "video"
    }

    fn status(&self) -> BackendStatus {
        self.status.clone()
    }

    fn try_apply(&mut self, change: VolumeChange) -> Result<(), MediaError> {
        if !self.status.is_ready() {
            return Err(MediaError::NotReady);
        }

        match self.command(change) {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_ready() => Err(err),
            Err(err) => {
                self.status = BackendStatus::Error(err.clone());
                Err(err)
            }
        }
    }
}

/// Placeholder type for an empty `Weak`
struct NoElement;

impl VideoElement for NoElement {
    fn set_volume(&mut self, _volume: f64) -> Result<(), MediaError> {
        Err(MediaError::NotReady)
    }

    fn set_muted(&mut self, _muted: bool) -> Result<(), MediaError> {
        Err(MediaError::NotReady)
    }
}
