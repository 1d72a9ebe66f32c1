use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pm_widgets::ui::components::multi_select::MultiSelectLayout;
use pm_widgets::ui::components::{assignee_style, MultiSelectAssignee, SelectOption};
use pm_widgets::ui::core::{Action, Component};
use pm_widgets::ui::units::CssLength;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn people() -> Vec<SelectOption> {
    vec![
        SelectOption::new("u-1", "Alice Martin"),
        SelectOption::new("u-2", "Bruno Costa"),
        SelectOption::new("u-3", "Chen Wei").disabled(),
    ]
}

fn values(selected: Vec<SelectOption>) -> Vec<String> {
    selected.into_iter().map(|o| o.value).collect()
}

fn assignee_picker() -> MultiSelectAssignee {
    MultiSelectAssignee::new(
        people(),
        Box::new(|selected, _added| Action::AssigneesChanged(values(selected))),
        Box::new(|selected, removed| {
            Action::sequence([
                Action::AssigneesChanged(values(selected)),
                Action::ReasonSubmitted(removed.value),
            ])
        }),
    )
}

#[test]
fn test_style_with_no_selection() {
    let style = assignee_style(0);
    assert_eq!(style.font_size, CssLength::Px(14));
    assert_eq!(style.width, CssLength::Px(300));
    assert_eq!(style.margin_bottom, CssLength::Px(0));
    assert_eq!(style.height, CssLength::Px(40));
}

#[test]
fn test_style_with_one_selection() {
    let style = assignee_style(1);
    assert_eq!(style.font_size, CssLength::Px(12));
    assert_eq!(style.width, CssLength::Px(300));
    assert_eq!(style.margin_bottom, CssLength::Px(0));
    assert_eq!(style.height, CssLength::Px(40));
}

#[test]
fn test_style_with_several_selections() {
    for count in [2, 5] {
        let style = assignee_style(count);
        assert_eq!(style.font_size, CssLength::Px(12));
        assert_eq!(style.width, CssLength::Px(560));
        assert_eq!(style.margin_bottom, CssLength::Px(16));
        assert_eq!(style.height, CssLength::Auto);
    }
}

#[test]
fn test_style_to_terminal_layout() {
    assert_eq!(
        assignee_style(0).layout(),
        MultiSelectLayout {
            width: Some(38),
            height: Some(3),
            margin_bottom: 0,
            compact: false,
        }
    );
    assert_eq!(
        assignee_style(3).layout(),
        MultiSelectLayout {
            width: Some(70),
            height: None,
            margin_bottom: 1,
            compact: true,
        }
    );
}

#[test]
fn test_selecting_proposes_new_list_without_applying_it() {
    let mut picker = assignee_picker();

    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(picker.is_open());

    let action = picker.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(action, Action::AssigneesChanged(vec!["u-1".to_string()]));

    // The selection belongs to the caller
    assert!(picker.selected_values().is_empty());
    assert_eq!(picker.style(), assignee_style(0));
}

#[test]
fn test_applying_selection_restyles() {
    let mut picker = assignee_picker();
    picker.set_selected_values(people()[..2].to_vec());

    assert_eq!(picker.selected_values().len(), 2);
    assert_eq!(picker.style(), assignee_style(2));
}

#[test]
fn test_toggling_selected_option_removes_it() {
    let mut picker = assignee_picker();
    picker.set_selected_values(people()[..2].to_vec());

    picker.handle_key_events(key(KeyCode::Enter));
    let action = picker.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::Batch(vec![
            Action::AssigneesChanged(vec!["u-2".to_string()]),
            Action::ReasonSubmitted("u-1".to_string()),
        ])
    );
}

#[test]
fn test_backspace_removes_last_chip() {
    let mut picker = assignee_picker();
    picker.set_selected_values(people()[..2].to_vec());

    let action = picker.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(action.flatten()[0], Action::AssigneesChanged(vec!["u-1".to_string()]));
}

#[test]
fn test_disabled_option_cannot_be_selected() {
    let mut picker = assignee_picker();
    picker.handle_key_events(key(KeyCode::Enter));
    picker.handle_key_events(key(KeyCode::Down));
    picker.handle_key_events(key(KeyCode::Down));

    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_escape_closes_menu() {
    let mut picker = assignee_picker();
    picker.handle_key_events(key(KeyCode::Down));
    assert!(picker.is_open());
    picker.handle_key_events(key(KeyCode::Esc));
    assert!(!picker.is_open());
}

#[test]
fn test_required_height_follows_style() {
    let mut picker = assignee_picker();
    assert_eq!(picker.required_height(80), 3);

    picker.set_selected_values(people()[..2].to_vec());
    // One line of chips, borders and the 16px margin
    assert_eq!(picker.required_height(80), 4);
}

#[test]
fn test_render_placeholder_and_chips() {
    let mut picker = assignee_picker();
    let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();

    terminal.draw(|f| picker.render(f, f.area())).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Select Assignee"));

    picker.set_selected_values(people()[..2].to_vec());
    terminal.draw(|f| picker.render(f, f.area())).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Alice Martin"));
    assert!(text.contains("Bruno Costa"));
}

#[test]
fn test_menu_scrolls_to_keep_highlight_visible() {
    let crowd: Vec<SelectOption> = (0..12)
        .map(|i| SelectOption::new(format!("u-{i}"), format!("Person{i:02}")))
        .collect();
    let mut picker = MultiSelectAssignee::new(
        crowd,
        Box::new(|selected, _added| Action::AssigneesChanged(values(selected))),
        Box::new(|selected, _removed| Action::AssigneesChanged(values(selected))),
    );
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();

    picker.handle_key_events(key(KeyCode::Enter));
    for _ in 0..10 {
        picker.handle_key_events(key(KeyCode::Down));
    }
    terminal.draw(|f| picker.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Person10"));
    assert!(!text.contains("Person00"));
}
