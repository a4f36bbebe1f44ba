//! Discrete-press filter for the flap key.
//!
//! A held key must produce one flap, not one per frame or one per terminal
//! auto-repeat. Terminals with keyboard enhancement report releases and tag
//! repeats; plain terminals only send a stream of presses, so silence stands in
//! for the release event there. Before the first auto-repeat the OS waits its
//! initial repeat delay (typically 250-600ms), so the silence needed to count as a
//! release is long until repeats start and short once they arrive.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::is_flap_key;
use crate::types::GameAction;

// Covers the slowest common OS repeat delay.
const DEFAULT_INITIAL_REPEAT_DELAY_MS: u32 = 600;

// Auto-repeat streams arrive every ~30-50ms once they start.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 60;

#[derive(Debug, Clone)]
pub struct FlapInput {
    held: bool,
    /// Time since the last flap-key event.
    idle_ms: u32,
    /// An auto-repeat arrived for the current hold.
    repeating: bool,
    initial_repeat_delay_ms: u32,
    key_release_timeout_ms: u32,
    /// Set once the terminal has sent a real release; silence is then ignored.
    reports_release: bool,
}

impl FlapInput {
    pub fn new() -> Self {
        Self {
            held: false,
            idle_ms: 0,
            repeating: false,
            initial_repeat_delay_ms: DEFAULT_INITIAL_REPEAT_DELAY_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            reports_release: false,
        }
    }

    pub fn with_initial_repeat_delay_ms(mut self, delay_ms: u32) -> Self {
        self.initial_repeat_delay_ms = delay_ms;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn initial_repeat_delay_ms(&self) -> u32 {
        self.initial_repeat_delay_ms
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Route a full crossterm key event (press, repeat or release).
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(key.code),
            // Tagged auto-repeat never flaps, but it proves the key is still down.
            KeyEventKind::Repeat => {
                if is_flap_key(key.code) {
                    self.idle_ms = 0;
                    self.repeating = true;
                }
                None
            }
            KeyEventKind::Release => {
                self.handle_key_release(key.code);
                None
            }
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if !is_flap_key(code) {
            return None;
        }
        self.idle_ms = 0;
        if self.held {
            self.repeating = true;
            return None;
        }
        self.held = true;
        self.repeating = false;
        Some(GameAction::Flap)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if is_flap_key(code) {
            self.reports_release = true;
            self.held = false;
            self.repeating = false;
            self.idle_ms = 0;
        }
    }

    /// Advance the auto-release timer.
    pub fn update(&mut self, elapsed_ms: u32) {
        if !self.held || self.reports_release {
            return;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        let limit = if self.repeating {
            self.key_release_timeout_ms
        } else {
            self.initial_repeat_delay_ms
        };
        if self.idle_ms > limit {
            self.held = false;
            self.repeating = false;
        }
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.repeating = false;
        self.idle_ms = 0;
    }
}

impl Default for FlapInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_first_press_flaps() {
        let mut fi = FlapInput::new();
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
        assert!(fi.is_held());
    }

    #[test]
    fn test_auto_repeat_presses_are_swallowed() {
        let mut fi = FlapInput::new().with_key_release_timeout_ms(60);
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
        for _ in 0..20 {
            fi.update(30);
            assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), None);
        }
    }

    #[test]
    fn test_slow_first_repeat_does_not_flap_again() {
        let mut fi = FlapInput::new();
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
        for _ in 0..31 {
            fi.update(16);
        }
        // First auto-repeat after a 496ms initial delay.
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), None);
        assert!(fi.is_held());
    }

    #[test]
    fn test_tap_releases_after_initial_repeat_delay() {
        let mut fi = FlapInput::new().with_initial_repeat_delay_ms(300);
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
        fi.update(300);
        assert!(fi.is_held());
        fi.update(1);
        assert!(!fi.is_held());
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
    }

    #[test]
    fn test_silence_releases_without_release_events() {
        let mut fi = FlapInput::new().with_key_release_timeout_ms(60);
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), None);
        fi.update(60);
        assert!(fi.is_held(), "exactly at the timeout the key is still held");
        fi.update(1);
        assert!(!fi.is_held());
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
    }

    #[test]
    fn test_release_event_allows_next_press() {
        let mut fi = FlapInput::new();
        assert_eq!(
            fi.handle_key_event(event(KeyCode::Char(' '), KeyEventKind::Press)),
            Some(GameAction::Flap)
        );
        assert_eq!(
            fi.handle_key_event(event(KeyCode::Char(' '), KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            fi.handle_key_event(event(KeyCode::Char(' '), KeyEventKind::Release)),
            None
        );
        assert_eq!(
            fi.handle_key_event(event(KeyCode::Char(' '), KeyEventKind::Press)),
            Some(GameAction::Flap)
        );
    }

    #[test]
    fn test_timeout_is_ignored_once_releases_are_reported() {
        let mut fi = FlapInput::new().with_key_release_timeout_ms(10);
        fi.handle_key_press(KeyCode::Char(' '));
        fi.handle_key_release(KeyCode::Char(' '));

        // Long hold with no repeats: still one flap.
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
        fi.update(1_000);
        assert!(fi.is_held());
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_other_keys_do_not_touch_state() {
        let mut fi = FlapInput::new().with_key_release_timeout_ms(50);
        fi.handle_key_press(KeyCode::Char(' '));
        fi.handle_key_press(KeyCode::Char(' '));
        fi.update(40);
        assert_eq!(fi.handle_key_press(KeyCode::Char('x')), None);
        fi.update(20);
        assert!(!fi.is_held(), "a non-flap key must not extend the hold");
    }

    #[test]
    fn test_reset_clears_hold() {
        let mut fi = FlapInput::new();
        fi.handle_key_press(KeyCode::Char(' '));
        fi.reset();
        assert_eq!(fi.handle_key_press(KeyCode::Char(' ')), Some(GameAction::Flap));
    }

    #[test]
    fn test_default_timeouts_cover_repeat_delay() {
        let fi = FlapInput::default();
        assert!(fi.key_release_timeout_ms() > 0);
        assert!(fi.initial_repeat_delay_ms() >= 500);
    }
}
