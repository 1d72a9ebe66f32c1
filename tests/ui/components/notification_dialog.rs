use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pm_widgets::icons::{IconService, IconTheme};
use pm_widgets::ui::components::notification_dialog::DialogButton;
use pm_widgets::ui::components::{DialogKind, NotificationDialog};
use pm_widgets::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn confirm_dialog() -> NotificationDialog {
    let mut dialog = NotificationDialog::new("Archive project?", Action::CloseNotification)
        .confirmation(true)
        .on_confirm(Action::NotificationConfirmed)
        .on_cancel(Action::NotificationCancelled);
    dialog.set_open(true);
    dialog
}

#[test]
fn test_kind_priority_over_all_flag_combinations() {
    for is_error in [false, true] {
        for is_warning in [false, true] {
            for is_confirmation in [false, true] {
                let expected = if is_error {
                    DialogKind::Error
                } else if is_confirmation {
                    DialogKind::Confirmation
                } else if is_warning {
                    DialogKind::Warning
                } else {
                    DialogKind::Notification
                };
                assert_eq!(DialogKind::from_flags(is_error, is_warning, is_confirmation), expected);

                let dialog = NotificationDialog::new("", Action::CloseNotification)
                    .error(is_error)
                    .warning(is_warning)
                    .confirmation(is_confirmation);
                assert_eq!(dialog.kind(), expected);
            }
        }
    }
}

#[test]
fn test_titles_and_icons() {
    assert_eq!(DialogKind::Notification.title(), "Notification");
    assert_eq!(DialogKind::Warning.title(), "Warning");
    assert_eq!(DialogKind::Error.title(), "Error");
    assert_eq!(DialogKind::Confirmation.title(), "Confirmation");

    let icons = IconService::new(IconTheme::Ascii);
    assert_eq!(DialogKind::Error.icon(&icons), "X");
    assert_eq!(DialogKind::Warning.icon(&icons), "!");
}

#[test]
fn test_confirm_emits_close_before_callback() {
    let dialog = confirm_dialog();
    assert_eq!(
        dialog.confirm(),
        Action::Batch(vec![Action::CloseNotification, Action::NotificationConfirmed])
    );
}

#[test]
fn test_cancel_emits_close_before_callback() {
    let dialog = confirm_dialog();
    assert_eq!(
        dialog.cancel(),
        Action::Batch(vec![Action::CloseNotification, Action::NotificationCancelled])
    );
}

#[test]
fn test_escape_proposes_close_only() {
    let mut dialog = confirm_dialog();
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::CloseNotification);
    // Visibility stays with the caller
    assert!(dialog.is_open());
}

#[test]
fn test_absent_callbacks_are_noops() {
    let mut dialog = NotificationDialog::new("Saved", Action::CloseNotification);
    dialog.set_open(true);

    assert!(dialog.available_buttons().is_empty());
    assert!(dialog.buttons().is_empty());
    assert_eq!(dialog.confirm(), Action::None);
    assert_eq!(dialog.cancel(), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::CloseNotification);
}

#[test]
fn test_only_supplied_buttons_are_available() {
    let dialog = NotificationDialog::new("Retry?", Action::CloseNotification)
        .error(true)
        .on_confirm(Action::NotificationConfirmed);
    assert_eq!(dialog.available_buttons(), vec![DialogButton::Confirm]);
    assert!(dialog.has_confirm());
    assert!(!dialog.has_cancel());
}

#[test]
fn test_keyboard_focus_and_activation() {
    let mut dialog = confirm_dialog();
    assert_eq!(dialog.focused_button(), Some(DialogButton::Confirm));

    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.focused_button(), Some(DialogButton::Cancel));
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::Batch(vec![Action::CloseNotification, Action::NotificationCancelled])
    );

    dialog.handle_key_events(key(KeyCode::Left));
    assert_eq!(dialog.focused_button(), Some(DialogButton::Confirm));
}

#[test]
fn test_shortcut_keys() {
    let mut dialog = confirm_dialog();
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), dialog.confirm());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('n'))), dialog.cancel());
}

#[test]
fn test_closed_dialog_ignores_keys() {
    let mut dialog = confirm_dialog();
    dialog.set_open(false);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);
}

#[test]
fn test_default_and_custom_labels() {
    let dialog = confirm_dialog();
    let labels: Vec<String> = dialog.buttons().iter().map(|b| b.content().to_string()).collect();
    assert_eq!(labels, vec!["Cancel".to_string(), "Confirm".to_string()]);

    let dialog = confirm_dialog().confirm_label("Archive").cancel_label("Keep");
    let labels: Vec<String> = dialog.buttons().iter().map(|b| b.content().to_string()).collect();
    assert_eq!(labels, vec!["Keep".to_string(), "Archive".to_string()]);
}

#[test]
fn test_render_open_dialog() {
    let mut dialog = confirm_dialog();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Confirmation"));
    assert!(text.contains("Archive project?"));
    assert!(text.contains("Confirm"));
    assert!(text.contains("Cancel"));
}

#[test]
fn test_render_closed_dialog_draws_nothing() {
    let mut dialog = NotificationDialog::new("Hidden", Action::CloseNotification);
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    assert!(!buffer_text(terminal.backend().buffer()).contains("Hidden"));
}

#[test]
fn test_message_can_be_replaced_while_open() {
    let mut dialog = confirm_dialog();
    dialog.set_message("Archive every project?");
    assert_eq!(dialog.message(), "Archive every project?");
    assert!(dialog.is_open());

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Archive every project?"));
}
