//! Shared external-script registry
//!
//! Embedded players depend on one external script per source URL. Every
//! player subscribes to the registry instead of inserting its own copy; the
//! first subscriber triggers the injection and later ones share the entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use super::MediaError;

/// Load state of one external script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
struct ScriptEntry {
    status: ScriptStatus,
    subscribers: usize,
}

/// Reference-counted registry of external scripts, keyed by source URL
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    entries: Mutex<HashMap<String, ScriptEntry>>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> Arc<ScriptRegistry> {
        static GLOBAL: OnceLock<Arc<ScriptRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(ScriptRegistry::new())))
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, ScriptEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to a script, injecting it only if nobody has yet.
    ///
    /// `inject` runs at most once per live entry. If it fails the entry is
    /// marked [`ScriptStatus::Failed`]; it is injected again only after
    /// every lease on the failed entry has been dropped.
    pub fn subscribe<F>(self: &Arc<Self>, src: &str, inject: F) -> ScriptLease
    where
        F: FnOnce(&str) -> Result<(), MediaError>,
    {
        let needs_inject = {
            let mut entries = self.entries();
            match entries.get_mut(src) {
                Some(entry) => {
                    entry.subscribers += 1;
                    false
                }
                None => {
                    entries.insert(
                        src.to_string(),
                        ScriptEntry {
                            status: ScriptStatus::Loading,
                            subscribers: 1,
                        },
                    );
                    true
                }
            }
        };

        if needs_inject {
            tracing::info!(src, "injecting external script");
            if let Err(err) = inject(src) {
                tracing::error!(src, %err, "script injection failed");
                self.mark_failed(src);
            }
        } else {
            tracing::debug!(src, "script already present, waiting on shared entry");
        }

        ScriptLease {
            registry: Arc::clone(self),
            src: src.to_string(),
        }
    }

    pub fn status(&self, src: &str) -> Option<ScriptStatus> {
        self.entries().get(src).map(|entry| entry.status)
    }

    pub fn subscribers(&self, src: &str) -> usize {
        self.entries().get(src).map_or(0, |entry| entry.subscribers)
    }

    /// Script's global ready callback fired
    pub fn mark_ready(&self, src: &str) {
        self.set_status(src, ScriptStatus::Ready);
    }

    /// Script failed to load
    pub fn mark_failed(&self, src: &str) {
        self.set_status(src, ScriptStatus::Failed);
    }

    fn set_status(&self, src: &str, status: ScriptStatus) {
        match self.entries().get_mut(src) {
            Some(entry) => {
                tracing::info!(src, ?status, "script status changed");
                entry.status = status;
            }
            None => tracing::debug!(src, ?status, "status for unknown script ignored"),
        }
    }

    /// Drop one subscriber. A script that never became ready is forgotten
    /// with its last subscriber so a later mount injects it again.
    fn release(&self, src: &str) {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(src) else {
            return;
        };

        entry.subscribers = entry.subscribers.saturating_sub(1);
        if entry.subscribers == 0 && entry.status != ScriptStatus::Ready {
            entries.remove(src);
        }
    }
}

/// One subscription to a registry entry; unsubscribes on drop
#[derive(Debug)]
pub struct ScriptLease {
    registry: Arc<ScriptRegistry>,
    src: String,
}

impl ScriptLease {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn status(&self) -> ScriptStatus {
        self.registry
            .status(&self.src)
            .unwrap_or(ScriptStatus::Failed)
    }
}

impl Drop for ScriptLease {
    fn drop(&mut self) {
        self.registry.release(&self.src);
    }
}
