//! Project picker bound to a form's `project_id`.

use super::searchable_select::{OptionState, SearchableSelect};
use super::select_option::SelectOption;
use crate::constants::{PROJECT_LOADING, PROJECT_PLACEHOLDER};
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use serde::{Deserialize, Serialize};

/// A project as delivered by the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
}

/// The slice of form state the selector reads
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub project_id: Option<String>,
}

impl FormData {
    pub fn with_project(project_id: &str) -> Self {
        Self {
            project_id: Some(project_id.to_string()),
        }
    }
}

/// Receives the id of the newly picked project
pub type ProjectChangeHandler = Box<dyn Fn(String) -> Action>;

/// Options for `projects`, or a single inert loading row while nothing has arrived yet
#[must_use]
pub fn project_options(projects: &[ProjectRecord], is_loading: bool) -> Vec<SelectOption> {
    if is_loading && projects.is_empty() {
        return vec![SelectOption::new("", PROJECT_LOADING).disabled()];
    }
    projects
        .iter()
        .map(|p| SelectOption::new(p.id.clone(), p.name.clone()))
        .collect()
}

/// The option whose value is `project_id`, if any
#[must_use]
pub fn selected_project(options: &[SelectOption], project_id: Option<&str>) -> Option<SelectOption> {
    let project_id = project_id?;
    options.iter().find(|o| o.value == project_id).cloned()
}

/// Menu row style. Empty-value rows never highlight.
#[must_use]
pub fn option_style(state: OptionState) -> Style {
    if state.empty_value {
        return Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
    }
    match (state.focused, state.selected) {
        (true, true) => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White).bg(Color::DarkGray),
        (false, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::White),
    }
}

pub struct ProjectSelector {
    projects: Vec<ProjectRecord>,
    form_data: FormData,
    is_loading: bool,
    select: SearchableSelect,
}

impl ProjectSelector {
    pub fn new(
        projects: Vec<ProjectRecord>,
        form_data: FormData,
        is_loading: bool,
        on_change: ProjectChangeHandler,
    ) -> Self {
        let select = SearchableSelect::new(Vec::new())
            .placeholder(PROJECT_PLACEHOLDER)
            .option_style(option_style)
            .on_change(Box::new(move |option: Option<SelectOption>| match option {
                Some(option) if !option.has_empty_value() => on_change(option.value),
                _ => {
                    log::debug!("Ignoring cleared project selection");
                    Action::None
                }
            }));

        let mut selector = Self {
            projects,
            form_data,
            is_loading,
            select,
        };
        selector.sync();
        selector
    }

    fn sync(&mut self) {
        let options = project_options(&self.projects, self.is_loading);
        let selected = selected_project(&options, self.form_data.project_id.as_deref());
        self.select.set_options(options);
        self.select.set_selected(selected);
    }

    pub fn set_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.projects = projects;
        self.sync();
    }

    pub fn set_form_data(&mut self, form_data: FormData) {
        self.form_data = form_data;
        self.sync();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        self.sync();
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.select.set_icons(icons);
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn options(&self) -> &[SelectOption] {
        self.select.options()
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.select.selected()
    }

    /// Filter text typed since the menu last opened
    pub fn query(&self) -> &str {
        self.select.query()
    }

    pub fn is_open(&self) -> bool {
        self.select.is_open()
    }
}

impl Component for ProjectSelector {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.select.handle_key_events(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.select.render(f, rect);
    }

    fn on_focus(&mut self) {
        self.select.on_focus();
    }

    fn on_blur(&mut self) {
        self.select.on_blur();
    }
}
