use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pm_widgets::constants::BUTTON_BASE_CLASSES;
use pm_widgets::ui::components::Button;
use pm_widgets::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, style::Color, text::Line, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_button_role_and_base_classes() {
    let button = Button::new("Save");
    assert_eq!(button.role(), "submit");
    assert_eq!(button.classes(), BUTTON_BASE_CLASSES);
}

#[test]
fn test_button_appends_extra_classes() {
    let button = Button::new("Delete").class_name("bg-red-600");
    assert_eq!(button.classes(), format!("{} bg-red-600", BUTTON_BASE_CLASSES));
    assert_eq!(button.resolved().base.bg, Some(Color::Red));
}

#[test]
fn test_button_activation_emits_callback_once() {
    let mut button = Button::new("Open").on_click(Action::OpenReasonModal);

    assert_eq!(button.handle_key_events(key(KeyCode::Enter)), Action::OpenReasonModal);
    assert_eq!(button.handle_key_events(key(KeyCode::Char(' '))), Action::OpenReasonModal);
    assert_eq!(button.handle_key_events(key(KeyCode::Char('x'))), Action::None);
}

#[test]
fn test_button_without_callback_is_noop() {
    let mut button = Button::new("Idle");
    assert_eq!(button.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_button_focus_tracking() {
    let mut button = Button::new("Focus me");
    assert!(!button.is_focused());
    button.on_focus();
    assert!(button.is_focused());
    button.on_blur();
    assert!(!button.is_focused());
}

#[test]
fn test_button_size_includes_padding_and_border() {
    // "OK" + px-2 on each side + rounded border
    let button = Button::new("OK");
    assert_eq!(button.width(), 2 + 4 + 2);
    assert_eq!(button.height(), 3);
}

#[test]
fn test_button_renders_child_content() {
    let mut button = Button::new(Line::from("Submit")).class_name("uppercase");
    let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();

    terminal.draw(|f| button.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("SUBMIT"));
}
