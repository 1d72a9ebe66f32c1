//! Notification dialog
//!
//! A modal message box with one of four semantic kinds. Visibility is owned by
//! the caller: the dialog never closes itself, it returns the caller's
//! `on_close` action and waits for [`NotificationDialog::set_open`].

use super::button::Button;
use super::dialogs::common::{dialog_block, hint_bar, render_backdrop, shortcuts};
use crate::constants::{
    BUTTON_CANCEL_CLASSES, BUTTON_DANGER_CLASSES, LABEL_CANCEL, LABEL_CONFIRM, TITLE_CONFIRMATION, TITLE_ERROR,
    TITLE_NOTIFICATION, TITLE_WARNING,
};
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Semantic kind of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Notification,
    Warning,
    Error,
    Confirmation,
}

impl DialogKind {
    /// Resolve the kind from flags: error beats confirmation beats warning
    #[must_use]
    pub fn from_flags(is_error: bool, is_warning: bool, is_confirmation: bool) -> Self {
        if is_error {
            Self::Error
        } else if is_confirmation {
            Self::Confirmation
        } else if is_warning {
            Self::Warning
        } else {
            Self::Notification
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Notification => TITLE_NOTIFICATION,
            Self::Warning => TITLE_WARNING,
            Self::Error => TITLE_ERROR,
            Self::Confirmation => TITLE_CONFIRMATION,
        }
    }

    #[must_use]
    pub fn icon(self, icons: &IconService) -> &'static str {
        match self {
            Self::Notification => icons.notification(),
            Self::Warning => icons.warning(),
            Self::Error => icons.error(),
            Self::Confirmation => icons.confirmation(),
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Notification => Color::Cyan,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
            Self::Confirmation => Color::Blue,
        }
    }
}

/// Which dialog button has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Cancel,
    Confirm,
}

#[derive(Debug, Clone)]
pub struct NotificationDialog {
    is_open: bool,
    message: String,
    is_error: bool,
    is_warning: bool,
    is_confirmation: bool,
    on_close: Action,
    on_confirm: Option<Action>,
    on_cancel: Option<Action>,
    confirm_label: String,
    cancel_label: String,
    icons: IconService,
    focused_button: Option<DialogButton>,
}

impl NotificationDialog {
    /// A closed dialog showing `message` that proposes `on_close` to dismiss
    pub fn new(message: impl Into<String>, on_close: Action) -> Self {
        Self {
            is_open: false,
            message: message.into(),
            is_error: false,
            is_warning: false,
            is_confirmation: false,
            on_close,
            on_confirm: None,
            on_cancel: None,
            confirm_label: LABEL_CONFIRM.to_string(),
            cancel_label: LABEL_CANCEL.to_string(),
            icons: IconService::default(),
            focused_button: None,
        }
    }

    #[must_use]
    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    #[must_use]
    pub fn warning(mut self, is_warning: bool) -> Self {
        self.is_warning = is_warning;
        self
    }

    #[must_use]
    pub fn confirmation(mut self, is_confirmation: bool) -> Self {
        self.is_confirmation = is_confirmation;
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, action: Action) -> Self {
        self.on_confirm = Some(action);
        self.reset_focus();
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, action: Action) -> Self {
        self.on_cancel = Some(action);
        self.reset_focus();
        self
    }

    #[must_use]
    pub fn confirm_label(mut self, label: &str) -> Self {
        self.confirm_label = label.to_string();
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: &str) -> Self {
        self.cancel_label = label.to_string();
        self
    }

    /// Switch the kind flags in place
    pub fn set_kind(&mut self, kind: DialogKind) {
        self.is_error = kind == DialogKind::Error;
        self.is_warning = kind == DialogKind::Warning;
        self.is_confirmation = kind == DialogKind::Confirmation;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.is_open {
            self.reset_focus();
        }
        self.is_open = is_open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> DialogKind {
        DialogKind::from_flags(self.is_error, self.is_warning, self.is_confirmation)
    }

    pub fn title(&self) -> &'static str {
        self.kind().title()
    }

    pub fn has_confirm(&self) -> bool {
        self.on_confirm.is_some()
    }

    pub fn has_cancel(&self) -> bool {
        self.on_cancel.is_some()
    }

    pub fn focused_button(&self) -> Option<DialogButton> {
        self.focused_button
    }

    /// Close proposal, as emitted on Esc
    pub fn close(&self) -> Action {
        self.on_close.clone()
    }

    /// Close followed by the confirm callback, or nothing without one
    pub fn confirm(&self) -> Action {
        match &self.on_confirm {
            Some(action) => Action::sequence([self.on_close.clone(), action.clone()]),
            None => Action::None,
        }
    }

    /// Close followed by the cancel callback, or nothing without one
    pub fn cancel(&self) -> Action {
        match &self.on_cancel {
            Some(action) => Action::sequence([self.on_close.clone(), action.clone()]),
            None => Action::None,
        }
    }

    /// Buttons that will be rendered, left to right
    pub fn available_buttons(&self) -> Vec<DialogButton> {
        let mut buttons = Vec::new();
        if self.has_cancel() {
            buttons.push(DialogButton::Cancel);
        }
        if self.has_confirm() {
            buttons.push(DialogButton::Confirm);
        }
        buttons
    }

    fn reset_focus(&mut self) {
        let buttons = self.available_buttons();
        self.focused_button = if buttons.contains(&DialogButton::Confirm) {
            Some(DialogButton::Confirm)
        } else {
            buttons.first().copied()
        };
    }

    fn move_focus(&mut self, forward: bool) {
        let buttons = self.available_buttons();
        if buttons.is_empty() {
            return;
        }
        let current = self
            .focused_button
            .and_then(|b| buttons.iter().position(|x| *x == b))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % buttons.len()
        } else {
            (current + buttons.len() - 1) % buttons.len()
        };
        self.focused_button = Some(buttons[next]);
    }

    fn activate_focused(&self) -> Action {
        match self.focused_button {
            Some(DialogButton::Confirm) => self.confirm(),
            Some(DialogButton::Cancel) => self.cancel(),
            None => self.close(),
        }
    }

    fn build_button(&self, which: DialogButton) -> Button {
        let mut button = match which {
            DialogButton::Cancel => Button::new(self.cancel_label.clone())
                .class_name(BUTTON_CANCEL_CLASSES)
                .on_click(self.cancel()),
            DialogButton::Confirm if self.kind() == DialogKind::Error => Button::new(self.confirm_label.clone())
                .class_name(BUTTON_DANGER_CLASSES)
                .on_click(self.confirm()),
            DialogButton::Confirm => Button::new(self.confirm_label.clone()).on_click(self.confirm()),
        };
        button.set_focused(self.focused_button == Some(which));
        button
    }

    /// Rendered buttons with their focus applied
    pub fn buttons(&self) -> Vec<Button> {
        self.available_buttons()
            .into_iter()
            .map(|b| self.build_button(b))
            .collect()
    }
}

impl Component for NotificationDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_open {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Tab | KeyCode::Right => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.cancel(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_open {
            return;
        }

        render_backdrop(f, rect);

        let kind = self.kind();
        let buttons = self.buttons();
        let message_width = rect.width.saturating_mul(6) / 10;
        let message_lines = (self.message.chars().count() as u16 / message_width.saturating_sub(4).max(1)) + 1;
        let button_rows = buttons.iter().map(Button::height).max().unwrap_or(0);
        let height = message_lines + button_rows + 6;

        let area = LayoutManager::centered_rect_lines(60, height, rect);
        f.render_widget(Clear, area);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::raw(kind.icon(&self.icons)),
            Span::raw(" "),
            Span::styled(kind.title(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ]);
        let block = dialog_block(title, kind.color());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [message_area, _, buttons_area, instructions_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(button_rows),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(
            Paragraph::new(self.message.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true }),
            message_area,
        );

        if !buttons.is_empty() {
            let areas = Layout::horizontal(buttons.iter().map(|b| Constraint::Length(b.width())))
                .flex(Flex::Center)
                .spacing(2)
                .split(buttons_area);
            for (button, area) in buttons.iter().zip(areas.iter()) {
                button.draw(f, *area);
            }
        }

        let instructions = if buttons.is_empty() {
            vec![shortcuts::ESC_CLOSE]
        } else {
            vec![shortcuts::TAB_SWITCH, shortcuts::ENTER_ACTIVATE, shortcuts::ESC_CLOSE]
        };
        f.render_widget(hint_bar(&instructions), instructions_area);
    }
}
