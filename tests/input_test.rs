use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_flappy::core::Session;
use tui_flappy::input::{is_flap_key, should_quit, FlapInput};
use tui_flappy::types::{GameAction, SessionPhase};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyEventKind::Press)
}

#[test]
fn test_space_maps_to_flap() {
    assert!(is_flap_key(KeyCode::Char(' ')));
    assert!(!is_flap_key(KeyCode::Up));
    assert!(!is_flap_key(KeyCode::Enter));

    let mut input = FlapInput::new();
    assert_eq!(input.handle_key_event(press(KeyCode::Up)), None);
    assert_eq!(
        input.handle_key_event(press(KeyCode::Char(' '))),
        Some(GameAction::Flap)
    );
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(press(KeyCode::Char('q'))));
    assert!(should_quit(press(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(press(KeyCode::Char('c'))));
    assert!(!should_quit(press(KeyCode::Char(' '))));
}

#[test]
fn test_held_key_flaps_once_without_release_events() {
    let mut input = FlapInput::new();
    assert_eq!(
        input.handle_key_event(press(KeyCode::Char(' '))),
        Some(GameAction::Flap)
    );

    // Terminal auto-repeat: a stream of presses with short gaps.
    for _ in 0..10 {
        input.update(30);
        assert_eq!(input.handle_key_event(press(KeyCode::Char(' '))), None);
    }

    input.update(input.key_release_timeout_ms() + 1);
    assert!(!input.is_held());
    assert_eq!(
        input.handle_key_event(press(KeyCode::Char(' '))),
        Some(GameAction::Flap)
    );
}

#[test]
fn test_initial_repeat_delay_does_not_double_flap() {
    let mut input = FlapInput::new();
    assert_eq!(
        input.handle_key_event(press(KeyCode::Char(' '))),
        Some(GameAction::Flap)
    );

    // The OS waits about half a second before auto-repeat starts.
    input.update(500);
    assert_eq!(input.handle_key_event(press(KeyCode::Char(' '))), None);

    // Then repeats arrive quickly until the key goes up.
    for _ in 0..5 {
        input.update(33);
        assert_eq!(input.handle_key_event(press(KeyCode::Char(' '))), None);
    }
    input.update(input.key_release_timeout_ms() + 1);
    assert_eq!(
        input.handle_key_event(press(KeyCode::Char(' '))),
        Some(GameAction::Flap)
    );
}

#[test]
fn test_release_events_allow_fast_taps() {
    let mut input = FlapInput::new();
    let space = KeyCode::Char(' ');

    let mut flaps = 0;
    for _ in 0..3 {
        if input.handle_key_event(key(space, KeyEventKind::Press)).is_some() {
            flaps += 1;
        }
        assert!(input.handle_key_event(key(space, KeyEventKind::Repeat)).is_none());
        input.handle_key_event(key(space, KeyEventKind::Release));
        input.update(1);
    }
    assert_eq!(flaps, 3);
}

#[test]
fn test_flap_input_drives_session() {
    let mut input = FlapInput::new();
    let mut session = Session::new(1);

    if let Some(action) = input.handle_key_event(press(KeyCode::Char(' '))) {
        session.apply_action(action);
    }
    assert_eq!(session.phase(), SessionPhase::Playing);

    // Other keys never reach the session.
    assert!(input.handle_key_event(press(KeyCode::Left)).is_none());
}
