use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pm_widgets::ui::components::reason_modal::ReasonFocus;
use pm_widgets::ui::components::ReasonModal;
use pm_widgets::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn modal() -> ReasonModal {
    ReasonModal::new(Action::CloseReasonModal, Box::new(Action::ReasonSubmitted))
}

fn type_text(modal: &mut ReasonModal, text: &str) {
    for c in text.chars() {
        modal.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_closed_by_default_and_ignores_keys() {
    let mut modal = modal();
    assert!(!modal.is_open());
    assert_eq!(modal.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_reopening_starts_empty() {
    let mut modal = modal();
    modal.set_open(true);
    type_text(&mut modal, "late delivery");
    assert_eq!(modal.text(), "late delivery");

    modal.set_open(false);
    modal.set_open(true);
    assert_eq!(modal.text(), "");
}

#[test]
fn test_staying_open_keeps_text() {
    let mut modal = modal();
    modal.set_open(true);
    type_text(&mut modal, "abc");

    modal.set_open(true);
    assert_eq!(modal.text(), "abc");
}

#[test]
fn test_enter_submits_current_text() {
    let mut modal = modal();
    modal.set_open(true);
    type_text(&mut modal, "scope changed");

    assert_eq!(
        modal.handle_key_events(key(KeyCode::Enter)),
        Action::ReasonSubmitted("scope changed".to_string())
    );
}

#[test]
fn test_empty_submit_is_allowed() {
    let mut modal = modal();
    modal.set_open(true);
    assert_eq!(modal.submit(), Action::ReasonSubmitted(String::new()));
}

#[test]
fn test_escape_closes_without_submitting() {
    let mut modal = modal();
    modal.set_open(true);
    type_text(&mut modal, "never mind");

    assert_eq!(modal.handle_key_events(key(KeyCode::Esc)), Action::CloseReasonModal);
}

#[test]
fn test_buttons_through_tab_focus() {
    let mut modal = modal();
    modal.set_open(true);
    type_text(&mut modal, "x");

    modal.handle_key_events(key(KeyCode::Tab));
    assert_eq!(modal.focus(), ReasonFocus::Cancel);
    assert_eq!(modal.handle_key_events(key(KeyCode::Enter)), Action::CloseReasonModal);

    modal.handle_key_events(key(KeyCode::Tab));
    assert_eq!(modal.focus(), ReasonFocus::Submit);
    assert_eq!(
        modal.handle_key_events(key(KeyCode::Enter)),
        Action::ReasonSubmitted("x".to_string())
    );

    // Typing only edits while the input has focus
    modal.handle_key_events(key(KeyCode::Char('y')));
    assert_eq!(modal.text(), "x");

    modal.handle_key_events(key(KeyCode::BackTab));
    modal.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(modal.focus(), ReasonFocus::Input);
}

#[test]
fn test_render_open_modal() {
    let mut modal = modal();
    modal.set_open(true);
    type_text(&mut modal, "budget");

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| modal.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Enter Reason"));
    assert!(text.contains("budget"));
    assert!(text.contains("Submit"));
    assert!(text.contains("Cancel"));
}
