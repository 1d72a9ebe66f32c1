use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pm_widgets::ui::components::text_input::TextInput;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_insert_and_cursor_movement() {
    let mut input = TextInput::new();
    for c in "héllo".chars() {
        assert!(input.handle_key(key(KeyCode::Char(c))));
    }
    assert_eq!(input.value(), "héllo");
    assert_eq!(input.cursor_position(), 5);

    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Right));
    input.handle_key(key(KeyCode::Char('X')));
    assert_eq!(input.value(), "hXéllo");
}

#[test]
fn test_backspace_and_delete() {
    let mut input = TextInput::new();
    input.set_value("abc");

    assert!(input.backspace());
    assert_eq!(input.value(), "ab");
    assert!(!input.delete());

    input.move_left();
    assert!(input.delete());
    assert_eq!(input.value(), "a");
}

#[test]
fn test_control_chords_are_not_text() {
    let mut input = TextInput::new();
    assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(input.is_empty());
}

#[test]
fn test_clear_resets_cursor() {
    let mut input = TextInput::new();
    input.set_value("reason");
    input.clear();
    assert!(input.is_empty());
    assert_eq!(input.cursor_position(), 0);
}
