//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::views::PlayerAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt(&key) {
            self.quit();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_story();
                true
            }
            keys::BACK_TAB => {
                self.prev_story();
                true
            }
            keys::PERCENTAGE => {
                self.toggle_percentage();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Help {
            self.go_back();
        } else {
            self.quit();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view == View::Help {
            self.go_back();
        }
    }

    fn toggle_percentage(&mut self) {
        self.show_percentage = !self.show_percentage;
        let message = if self.show_percentage {
            "Percentage shown"
        } else {
            "Percentage hidden"
        };
        self.notification = Some(Notification::info(message));
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        let step = self.config.step();

        match self.current_view {
            View::Primary => {
                self.primary_view.handle_key(key, step);
            }
            View::Help => {
                if keys::is_scroll_down(key.code) {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                } else if keys::is_scroll_up(key.code) {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
            }
            story => {
                if let Some(view) = self.player_view_mut(story) {
                    let action = view.handle_key(key, step);
                    self.handle_player_action(story, action);
                }
            }
        }
    }

    fn handle_player_action(&mut self, story: View, action: PlayerAction) {
        let Some(view) = self.player_view_mut(story) else {
            return;
        };

        match action {
            PlayerAction::None => {}
            PlayerAction::Remount => {
                view.remount();
                self.notification = Some(Notification::info(format!(
                    "{} remounted",
                    story.title()
                )));
            }
            PlayerAction::Fail => {
                view.fail();
            }
        }
    }
}
