//! Primary story
//!
//! The bare volume control with no backend. Every change the listener
//! receives is appended to a short log so the callback contract is visible.

mod render;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crossterm::event::KeyEvent;

use super::apply_intent;
use crate::control::VolumeController;
use crate::keys;
use crate::model::VolumeChange;

/// Number of changes kept in the log
pub const CHANGE_LOG_LEN: usize = 8;

/// Primary story state
#[derive(Debug)]
pub struct PrimaryView {
    pub(super) controller: VolumeController,
    pub(super) changes: Rc<RefCell<VecDeque<VolumeChange>>>,
}

impl Default for PrimaryView {
    fn default() -> Self {
        Self::new(i32::from(crate::model::DEFAULT_LEVEL))
    }
}

impl PrimaryView {
    pub fn new(initial_volume: i32) -> Self {
        let changes = Rc::new(RefCell::new(VecDeque::with_capacity(CHANGE_LOG_LEN)));
        let mut controller = VolumeController::new(initial_volume);

        let log = Rc::clone(&changes);
        controller.set_listener(move |change| {
            let mut log = log.borrow_mut();
            if log.len() == CHANGE_LOG_LEN {
                log.pop_front();
            }
            log.push_back(change);
        });

        Self {
            controller,
            changes,
        }
    }

    pub fn controller(&self) -> &VolumeController {
        &self.controller
    }

    /// Changes received by the listener, oldest first
    pub fn changes(&self) -> Vec<VolumeChange> {
        self.changes.borrow().iter().copied().collect()
    }

    /// Handle a key. Returns the change it produced, if any.
    pub fn handle_key(&mut self, key: KeyEvent, step: u8) -> Option<VolumeChange> {
        let intent = keys::volume_intent(key.code)?;
        Some(apply_intent(&mut self.controller, intent, step))
    }
}
