//! Player story key handling

use crossterm::event::KeyEvent;

use super::{PlayerAction, PlayerView};
use crate::keys;
use crate::ui::views::apply_intent;

impl PlayerView {
    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent, step: u8) -> PlayerAction {
        if let Some(intent) = keys::volume_intent(key.code) {
            apply_intent(&mut self.controller, intent, step);
            return PlayerAction::None;
        }

        match key.code {
            keys::REMOUNT => PlayerAction::Remount,
            keys::FAIL => PlayerAction::Fail,
            _ => PlayerAction::None,
        }
    }
}
