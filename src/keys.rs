//! Keybinding definitions for Volstage
//!
//! All keybindings live here so the help panel and the status bar stay in
//! sync with input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Next story
pub const TAB: KeyCode = KeyCode::Tab;

/// Previous story
pub const BACK_TAB: KeyCode = KeyCode::BackTab;

/// Back to previous view
pub const ESC: KeyCode = KeyCode::Esc;

/// Check if key scrolls down (j or Down arrow)
pub fn is_scroll_down(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('j') | KeyCode::Down)
}

/// Check if key scrolls up (k or Up arrow)
pub fn is_scroll_up(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('k') | KeyCode::Up)
}

// =============================================================================
// Volume control keys
// =============================================================================

/// Volume down (vim style)
pub const VOLUME_DOWN: KeyCode = KeyCode::Char('h');

/// Volume down (arrow key)
pub const VOLUME_DOWN_ARROW: KeyCode = KeyCode::Left;

/// Volume up (vim style)
pub const VOLUME_UP: KeyCode = KeyCode::Char('l');

/// Volume up (arrow key)
pub const VOLUME_UP_ARROW: KeyCode = KeyCode::Right;

/// Toggle mute (the mute button)
pub const MUTE: KeyCode = KeyCode::Char('m');

/// Toggle the percentage label
pub const PERCENTAGE: KeyCode = KeyCode::Char('p');

// =============================================================================
// Player story keys
// =============================================================================

/// Tear down and mount the player again
pub const REMOUNT: KeyCode = KeyCode::Char('r');

/// Make the backend fail
pub const FAIL: KeyCode = KeyCode::Char('x');

/// What a key press asks the volume control to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIntent {
    StepUp,
    StepDown,
    /// Jump to an absolute level
    Set(i32),
    ToggleMute,
}

/// Map a key to a volume intent. Digits jump to n×10 (`0` is silence).
pub fn volume_intent(code: KeyCode) -> Option<VolumeIntent> {
    match code {
        VOLUME_UP | VOLUME_UP_ARROW => Some(VolumeIntent::StepUp),
        VOLUME_DOWN | VOLUME_DOWN_ARROW => Some(VolumeIntent::StepDown),
        MUTE => Some(VolumeIntent::ToggleMute),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|d| VolumeIntent::Set(d as i32 * 10)),
        _ => None,
    }
}

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Next story",
    },
    KeyBindEntry {
        key: "S-Tab",
        description: "Previous story",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Scroll help",
    },
];

/// Volume control key bindings for help display
pub const VOLUME_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/←",
        description: "Volume down",
    },
    KeyBindEntry {
        key: "l/→",
        description: "Volume up",
    },
    KeyBindEntry {
        key: "0-9",
        description: "Set volume to n×10",
    },
    KeyBindEntry {
        key: "m",
        description: "Mute / Unmute",
    },
    KeyBindEntry {
        key: "p",
        description: "Toggle percentage",
    },
];

/// Player story key bindings for help display
pub const PLAYER_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "r",
        description: "Remount player",
    },
    KeyBindEntry {
        key: "x",
        description: "Simulate backend error",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_VOLUME: KeyHint = KeyHint {
    key: "←/→",
    label: "Volume",
    color: Color::Green,
};
pub const HINT_MUTE: KeyHint = KeyHint {
    key: "m",
    label: "Mute",
    color: Color::Yellow,
};
pub const HINT_UNMUTE: KeyHint = KeyHint {
    key: "m",
    label: "Unmute",
    color: Color::Yellow,
};
pub const HINT_REMOUNT: KeyHint = KeyHint {
    key: "r",
    label: "Remount",
    color: Color::Magenta,
};
pub const HINT_STORY: KeyHint = KeyHint {
    key: "Tab",
    label: "Story",
    color: Color::Blue,
};
pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};

/// Hints for the current view
pub fn story_hints(muted: bool, has_player: bool) -> Vec<KeyHint> {
    let mut hints = vec![
        HINT_VOLUME,
        if muted { HINT_UNMUTE } else { HINT_MUTE },
    ];
    if has_player {
        hints.push(HINT_REMOUNT);
    }
    hints.extend([HINT_STORY, HINT_HELP, HINT_QUIT]);
    hints
}

/// Hints for the help view
pub const HELP_VIEW_HINTS: &[KeyHint] = &[HINT_BACK];
