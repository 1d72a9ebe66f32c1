use crate::config::Config;
use crate::constants::{
    BUTTON_DANGER_CLASSES, BUTTON_MUTED_CLASSES, BUTTON_SUCCESS_CLASSES, BUTTON_WARNING_CLASSES, DEMO_DATA,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{
    Button, DialogKind, Footer, FormData, ImageComponent, MultiSelectAssignee, NotificationDialog, ProjectRecord,
    ProjectSelector, ReasonModal, SelectOption,
};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use serde::Deserialize;
use tokio::sync::mpsc;

/// Fixtures the gallery feeds into its components
#[derive(Debug, Clone, Deserialize)]
pub struct DemoData {
    pub projects: Vec<ProjectRecord>,
    pub assignees: Vec<SelectOption>,
    pub routes: Vec<String>,
}

impl DemoData {
    pub fn load() -> Result<Self> {
        serde_json::from_str(DEMO_DATA).context("Failed to parse demo data")
    }
}

/// Focusable parts of the gallery, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Assignees,
    Project,
    Button(usize),
}

/// Message shown by the notification dialog for each kind
pub fn demo_message(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Notification => "Your changes have been saved.",
        DialogKind::Warning => "This project has no assignee yet.",
        DialogKind::Error => "The project could not be archived.",
        DialogKind::Confirmation => "Archive this project for every member?",
    }
}

pub struct AppComponent {
    // Components
    banner: ImageComponent,
    assignees: MultiSelectAssignee,
    project_selector: ProjectSelector,
    buttons: Vec<Button>,
    dialog: NotificationDialog,
    reason_modal: ReasonModal,
    footer: Footer,

    // Gallery state
    data: DemoData,
    icons: IconService,
    focus: usize,
    status: String,
    show_logs: bool,
    button_areas: Vec<Rect>,

    // Services
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    /// Build the gallery and start the banner timer. Requires a Tokio runtime.
    pub fn new(config: &Config, logger: Logger) -> Result<Self> {
        let data = DemoData::load()?;
        let (action_tx, background_action_rx) = mpsc::unbounded_channel();
        let icons = IconService::new(config.ui.icon_theme);

        let banner = ImageComponent::mount_with_interval(action_tx, config.ui.quote_interval());

        let mut assignees = MultiSelectAssignee::new(
            data.assignees.clone(),
            Box::new(|selected, added| {
                log::debug!("Assignee added: {}", added.label);
                Action::AssigneesChanged(selected.into_iter().map(|o| o.value).collect())
            }),
            Box::new(|selected, removed| {
                log::debug!("Assignee removed: {}", removed.label);
                Action::AssigneesChanged(selected.into_iter().map(|o| o.value).collect())
            }),
        );
        assignees.set_icons(icons.clone());

        let mut project_selector = ProjectSelector::new(
            data.projects.clone(),
            FormData::default(),
            false,
            Box::new(Action::ProjectChanged),
        );
        project_selector.set_icons(icons.clone());

        let buttons = vec![
            Button::new("Notify").on_click(Action::ShowNotification(DialogKind::Notification)),
            Button::new("Warn")
                .class_name(BUTTON_WARNING_CLASSES)
                .on_click(Action::ShowNotification(DialogKind::Warning)),
            Button::new("Fail")
                .class_name(BUTTON_DANGER_CLASSES)
                .on_click(Action::ShowNotification(DialogKind::Error)),
            Button::new("Ask")
                .class_name(BUTTON_SUCCESS_CLASSES)
                .on_click(Action::ShowNotification(DialogKind::Confirmation)),
            Button::new("Reason...")
                .class_name(BUTTON_MUTED_CLASSES)
                .on_click(Action::OpenReasonModal),
        ];

        let mut dialog = NotificationDialog::new("", Action::CloseNotification);
        dialog.set_icons(icons.clone());

        let reason_modal = ReasonModal::new(
            Action::CloseReasonModal,
            Box::new(|text| Action::sequence([Action::CloseReasonModal, Action::ReasonSubmitted(text)])),
        );

        let routes = if config.footer.routes.is_empty() {
            data.routes.clone()
        } else {
            config.footer.routes.clone()
        };
        let footer = Footer::new().brand_name(&config.footer.brand_name).routes(routes);

        let mut app = Self {
            banner,
            assignees,
            project_selector,
            buttons,
            dialog,
            reason_modal,
            footer,
            data,
            icons,
            focus: 0,
            status: "Tab to move between widgets, ? for keys".to_string(),
            show_logs: false,
            button_areas: Vec::new(),
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.focus_current(true);
        log::info!("Gallery ready with {} projects", app.data.projects.len());
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Focusable form widgets in Tab order
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        [FocusTarget::Assignees, FocusTarget::Project]
            .into_iter()
            .chain((0..self.buttons.len()).map(FocusTarget::Button))
            .filter(|target| self.component(*target).is_focusable())
            .collect()
    }

    pub fn focused(&self) -> FocusTarget {
        let targets = self.focus_targets();
        targets
            .get(self.focus % targets.len().max(1))
            .copied()
            .unwrap_or(FocusTarget::Assignees)
    }

    fn component(&self, target: FocusTarget) -> &dyn Component {
        match target {
            FocusTarget::Assignees => &self.assignees,
            FocusTarget::Project => &self.project_selector,
            FocusTarget::Button(i) => &self.buttons[i],
        }
    }

    pub fn assignees(&self) -> &MultiSelectAssignee {
        &self.assignees
    }

    pub fn project_selector(&self) -> &ProjectSelector {
        &self.project_selector
    }

    pub fn dialog(&self) -> &NotificationDialog {
        &self.dialog
    }

    pub fn reason_modal(&self) -> &ReasonModal {
        &self.reason_modal
    }

    pub fn banner(&self) -> &ImageComponent {
        &self.banner
    }

    fn focused_component(&mut self) -> &mut dyn Component {
        match self.focused() {
            FocusTarget::Assignees => &mut self.assignees,
            FocusTarget::Project => &mut self.project_selector,
            FocusTarget::Button(i) => &mut self.buttons[i],
        }
    }

    fn focus_current(&mut self, focused: bool) {
        let component = self.focused_component();
        if focused {
            component.on_focus();
        } else {
            component.on_blur();
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.focus_targets().len().max(1);
        self.focus_current(false);
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
        self.focus_current(true);
    }

    fn menu_open(&self) -> bool {
        match self.focused() {
            FocusTarget::Assignees => self.assignees.is_open(),
            FocusTarget::Project => self.project_selector.is_open(),
            FocusTarget::Button(_) => false,
        }
    }

    /// Drain actions produced by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Apply an action and everything batched inside it, in order
    pub fn dispatch(&mut self, action: Action) {
        for action in action.flatten() {
            let leftover = self.update(action);
            if !leftover.is_none() {
                log::debug!("Unhandled action: {:?}", leftover);
            }
        }
    }

    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => Action::None,
        };
        self.dispatch(action);
    }

    /// Plain characters typed into the project selector filter its menu
    fn typed_into_selector(&self, key: KeyEvent) -> bool {
        self.focused() == FocusTarget::Project
            && matches!(key.code, KeyCode::Char(_))
            && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if self.typed_into_selector(key) {
            return self.project_selector.handle_key_events(key);
        }
        match key.code {
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('G') => Action::ToggleLogs,
            KeyCode::Char('L') => Action::ToggleProjectsLoading,
            KeyCode::Char('?') => {
                self.show_logs = false;
                Action::None
            }
            _ => self.focused_component().handle_key_events(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_open() || self.reason_modal.is_open() {
            return Action::None;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        let position = Position::new(mouse.column, mouse.row);
        let Some(index) = self.button_areas.iter().position(|area| area.contains(position)) else {
            return Action::None;
        };

        let targets = self.focus_targets();
        if let Some(target) = targets.iter().position(|t| *t == FocusTarget::Button(index)) {
            self.focus_current(false);
            self.focus = target;
            self.focus_current(true);
        }
        self.buttons[index].activate()
    }

    fn apply_icons(&mut self) {
        self.assignees.set_icons(self.icons.clone());
        self.project_selector.set_icons(self.icons.clone());
        self.dialog.set_icons(self.icons.clone());
    }

    fn show_notification(&mut self, kind: DialogKind) {
        let mut dialog = NotificationDialog::new(demo_message(kind), Action::CloseNotification);
        dialog.set_kind(kind);
        dialog = match kind {
            DialogKind::Confirmation => dialog
                .on_confirm(Action::NotificationConfirmed)
                .on_cancel(Action::NotificationCancelled)
                .confirm_label("Archive"),
            DialogKind::Error => dialog.on_confirm(Action::NotificationConfirmed).confirm_label("Retry"),
            DialogKind::Warning => dialog.on_confirm(Action::NotificationConfirmed),
            DialogKind::Notification => dialog,
        };
        dialog.set_icons(self.icons.clone());
        dialog.set_open(true);
        self.dialog = dialog;
    }

    fn render_form(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Components ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let assignee_height = self.assignees.required_height(inner.width);
        let button_height = self.buttons.iter().map(Button::height).max().unwrap_or(1);
        let [assignee_label, assignee_area, project_label, project_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(assignee_height),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(button_height),
        ])
        .areas(inner);

        let label_style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
        f.render_widget(Paragraph::new("Assignees").style(label_style), assignee_label);
        f.render_widget(Paragraph::new("Project").style(label_style), project_label);

        self.button_areas = Layout::horizontal(self.buttons.iter().map(|b| Constraint::Length(b.width())))
            .spacing(1)
            .split(buttons_area)
            .to_vec();
        for (button, area) in self.buttons.iter().zip(self.button_areas.iter()) {
            button.draw(f, *area);
        }

        // The focused selector draws last so its menu overlays the other
        if self.focused() == FocusTarget::Project {
            self.assignees.render(f, assignee_area);
            self.project_selector.render(f, project_area);
        } else {
            self.project_selector.render(f, project_area);
            self.assignees.render(f, assignee_area);
        }
    }

    fn render_side(&self, f: &mut Frame, area: Rect) {
        if self.show_logs {
            let items: Vec<ListItem> = self
                .logger
                .get_logs()
                .into_iter()
                .map(|line| ListItem::new(Line::from(line)))
                .collect();
            f.render_widget(
                List::new(items).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .title(" Logs "),
                ),
                area,
            );
            return;
        }

        let key = |k: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("{:<8}", k), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(desc),
            ])
        };
        let lines = vec![
            key("Tab", "next widget"),
            key("S-Tab", "previous widget"),
            key("Enter", "open / activate"),
            key("Space", "toggle assignee"),
            key("Bksp", "remove last / clear"),
            key("Esc", "close menu or dialog"),
            key("i", "cycle icon theme"),
            key("L", "toggle project loading"),
            key("G", "show logs"),
            key("q", "quit (Ctrl+C in the project field)"),
        ];
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Keys "),
            ),
            area,
        );
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.dialog.is_open() {
            return self.dialog.handle_key_events(key);
        }
        if self.reason_modal.is_open() {
            return self.reason_modal.handle_key_events(key);
        }
        if self.menu_open() {
            return self.focused_component().handle_key_events(key);
        }
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::AdvanceQuote => self.banner.update(action),
            Action::FocusNext => {
                self.move_focus(true);
                Action::None
            }
            Action::FocusPrevious => {
                self.move_focus(false);
                Action::None
            }
            Action::ShowNotification(kind) => {
                log::info!("Showing {:?} dialog", kind);
                self.show_notification(kind);
                Action::None
            }
            Action::CloseNotification => {
                self.dialog.set_open(false);
                Action::None
            }
            Action::NotificationConfirmed => {
                log::info!("Notification confirmed");
                self.status = format!("{} confirmed", self.dialog.title());
                Action::None
            }
            Action::NotificationCancelled => {
                log::info!("Notification cancelled");
                self.status = format!("{} cancelled", self.dialog.title());
                Action::None
            }
            Action::OpenReasonModal => {
                self.reason_modal.set_open(true);
                Action::None
            }
            Action::CloseReasonModal => {
                self.reason_modal.set_open(false);
                Action::None
            }
            Action::ReasonSubmitted(text) => {
                log::info!("Reason submitted ({} chars)", text.chars().count());
                self.status = if text.is_empty() {
                    "Reason submitted: (empty)".to_string()
                } else {
                    format!("Reason submitted: {}", text)
                };
                Action::None
            }
            Action::AssigneesChanged(values) => {
                let selected: Vec<SelectOption> = values
                    .iter()
                    .filter_map(|v| self.data.assignees.iter().find(|o| o.value == *v).cloned())
                    .collect();
                log::debug!("Assignees now {:?}", values);
                self.status = format!("{} assignee(s) selected", selected.len());
                self.assignees.set_selected_values(selected);
                Action::None
            }
            Action::ProjectChanged(project_id) => {
                log::debug!("Project changed to {}", project_id);
                self.project_selector.set_form_data(FormData::with_project(&project_id));
                if let Some(option) = self.project_selector.selected_option() {
                    self.status = format!("Project: {}", option.label);
                }
                Action::None
            }
            Action::ToggleProjectsLoading => {
                let loading = !self.project_selector.is_loading();
                let projects = if loading { Vec::new() } else { self.data.projects.clone() };
                self.project_selector.set_projects(projects);
                self.project_selector.set_loading(loading);
                log::info!("Project loading: {}", loading);
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.apply_icons();
                log::info!("Icon theme: {:?}", self.icons.theme());
                Action::None
            }
            Action::ToggleLogs => {
                self.show_logs = !self.show_logs;
                Action::None
            }
            Action::Quit => {
                log::info!("Quitting");
                self.should_quit = true;
                Action::None
            }
            Action::Batch(actions) => {
                for action in actions {
                    self.dispatch(action);
                }
                Action::None
            }
            Action::None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::gallery_layout(rect, self.footer.height());

        self.banner.render(f, areas.banner);
        self.render_side(f, areas.side);
        f.render_widget(
            Paragraph::new(self.status.clone()).style(Style::default().fg(Color::Black).bg(Color::Gray)),
            areas.status,
        );
        self.footer.render(f, areas.footer);
        self.render_form(f, areas.form);

        self.dialog.render(f, rect);
        self.reason_modal.render(f, rect);
    }
}
