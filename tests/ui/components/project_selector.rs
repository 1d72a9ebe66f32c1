use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pm_widgets::ui::components::project_selector::{option_style, project_options, selected_project};
use pm_widgets::ui::components::searchable_select::{OptionState, SearchableSelect};
use pm_widgets::ui::components::{FormData, ProjectRecord, ProjectSelector, SelectOption};
use pm_widgets::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, style::Color, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "p-100".to_string(),
            name: "Website Redesign".to_string(),
        },
        ProjectRecord {
            id: "p-200".to_string(),
            name: "Mobile App".to_string(),
        },
    ]
}

fn selector(form_data: FormData, is_loading: bool) -> ProjectSelector {
    ProjectSelector::new(projects(), form_data, is_loading, Box::new(Action::ProjectChanged))
}

#[test]
fn test_projects_map_to_options() {
    let options = project_options(&projects(), false);
    assert_eq!(
        options,
        vec![
            SelectOption::new("p-100", "Website Redesign"),
            SelectOption::new("p-200", "Mobile App"),
        ]
    );
}

#[test]
fn test_loading_placeholder_only_without_projects() {
    let options = project_options(&[], true);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "");
    assert_eq!(options[0].label, "Loading...");
    assert!(options[0].disabled);

    // Projects that already arrived are shown while still loading
    assert_eq!(project_options(&projects(), true).len(), 2);
    assert!(project_options(&[], false).is_empty());
}

#[test]
fn test_selected_project_lookup() {
    let options = project_options(&projects(), false);
    assert_eq!(selected_project(&options, Some("p-200")).map(|o| o.label), Some("Mobile App".to_string()));
    assert_eq!(selected_project(&options, Some("p-999")), None);
    assert_eq!(selected_project(&options, None), None);
}

#[test]
fn test_unmatched_project_id_selects_nothing() {
    let unmatched = selector(FormData::with_project("p-999"), false);
    assert!(unmatched.selected_option().is_none());

    let matched = selector(FormData::with_project("p-100"), false);
    assert_eq!(matched.selected_option().map(|o| o.value.as_str()), Some("p-100"));
}

#[test]
fn test_form_data_deserializes_without_project() {
    let form: FormData = serde_json::from_str("{}").unwrap();
    assert_eq!(form.project_id, None);
}

#[test]
fn test_picking_invokes_on_change_with_id() {
    let mut selector = selector(FormData::default(), false);

    assert_eq!(selector.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(selector.is_open());
    selector.handle_key_events(key(KeyCode::Down));

    assert_eq!(
        selector.handle_key_events(key(KeyCode::Enter)),
        Action::ProjectChanged("p-200".to_string())
    );
    assert!(!selector.is_open());
    // The caller owns form data
    assert!(selector.selected_option().is_none());
}

#[test]
fn test_typing_filters_case_insensitively() {
    let mut selector = selector(FormData::default(), false);

    for c in "MOB".chars() {
        selector.handle_key_events(key(KeyCode::Char(c)));
    }
    assert!(selector.is_open());

    assert_eq!(
        selector.handle_key_events(key(KeyCode::Enter)),
        Action::ProjectChanged("p-200".to_string())
    );
}

#[test]
fn test_cleared_selection_is_ignored() {
    let mut selector = selector(FormData::with_project("p-100"), false);

    assert_eq!(selector.handle_key_events(key(KeyCode::Backspace)), Action::None);
    assert_eq!(selector.selected_option().map(|o| o.value.as_str()), Some("p-100"));
}

#[test]
fn test_loading_placeholder_is_inert() {
    let mut selector = ProjectSelector::new(Vec::new(), FormData::default(), true, Box::new(Action::ProjectChanged));
    assert!(selector.is_loading());
    assert_eq!(selector.options()[0].label, "Loading...");

    selector.handle_key_events(key(KeyCode::Enter));
    assert_eq!(selector.handle_key_events(key(KeyCode::Enter)), Action::None);

    selector.set_loading(false);
    selector.set_projects(projects());
    assert_eq!(selector.options().len(), 2);
}

#[test]
fn test_option_style_never_highlights_empty_value() {
    let placeholder = option_style(OptionState {
        focused: true,
        selected: false,
        empty_value: true,
    });
    assert_eq!(placeholder.bg, None);
    assert_eq!(placeholder.fg, Some(Color::DarkGray));

    let focused = option_style(OptionState {
        focused: true,
        selected: false,
        empty_value: false,
    });
    assert_eq!(focused.bg, Some(Color::DarkGray));

    let chosen = option_style(OptionState {
        focused: true,
        selected: true,
        empty_value: false,
    });
    assert_eq!(chosen.bg, Some(Color::Blue));
}

#[test]
fn test_highlight_skips_disabled_options() {
    let mut select = SearchableSelect::new(vec![
        SelectOption::new("a", "Alpha"),
        SelectOption::new("b", "Beta").disabled(),
        SelectOption::new("c", "Gamma"),
    ]);
    select.open();
    assert_eq!(select.highlighted(), Some(0));

    select.highlight_next();
    assert_eq!(select.highlighted(), Some(2));

    select.highlight_next();
    assert_eq!(select.highlighted(), Some(0));

    select.highlight_previous();
    assert_eq!(select.highlighted(), Some(2));
}

#[test]
fn test_searchable_select_without_handler() {
    let mut select = SearchableSelect::new(vec![SelectOption::new("a", "Alpha")]);
    select.open();
    assert_eq!(select.pick_highlighted(), Action::None);
}

#[test]
fn test_render_shows_selection_and_menu() {
    let mut selector = selector(FormData::with_project("p-100"), false);
    let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

    terminal.draw(|f| selector.render(f, f.area())).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Website Redesign"));

    selector.handle_key_events(key(KeyCode::Enter));
    terminal.draw(|f| selector.render(f, f.area())).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Mobile App"));
}

#[test]
fn test_menu_scrolls_to_keep_highlight_visible() {
    let many: Vec<ProjectRecord> = (0..20)
        .map(|i| ProjectRecord {
            id: format!("p-{i}"),
            name: format!("Proj{i:02}"),
        })
        .collect();
    let mut selector = ProjectSelector::new(many, FormData::default(), false, Box::new(Action::ProjectChanged));
    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();

    selector.handle_key_events(key(KeyCode::Enter));
    for _ in 0..15 {
        selector.handle_key_events(key(KeyCode::Down));
    }
    terminal.draw(|f| selector.render(f, f.area())).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Proj15"));
    assert!(!text.contains("Proj00"));
    assert_eq!(selector.handle_key_events(key(KeyCode::Enter)), Action::ProjectChanged("p-15".to_string()));
}
