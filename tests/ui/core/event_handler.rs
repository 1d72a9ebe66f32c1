use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pm_widgets::ui::core::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(100));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(250)).tick_rate(),
        Duration::from_millis(250)
    );
}

#[test]
fn test_classify_key_press() {
    let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(key)), EventType::Key(k) if k.code == KeyCode::Enter));
}

#[test]
fn test_classify_ignores_key_release() {
    let key = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventHandler::classify(Event::Key(key)), EventType::Other));
}

#[test]
fn test_classify_resize() {
    assert!(matches!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24)));
}
