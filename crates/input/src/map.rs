//! Key mapping for terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether `code` is the flap key.
pub fn is_flap_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' '))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
