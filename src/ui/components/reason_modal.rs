//! Free-text reason prompt
//!
//! Controlled like the notification dialog: the caller decides when the
//! modal is open. Each time it opens the text buffer starts empty.

use super::button::Button;
use super::dialogs::common::{dialog_block, hint_bar, input_field, render_backdrop, shortcuts};
use super::text_input::TextInput;
use crate::constants::{BUTTON_CANCEL_CLASSES, LABEL_CANCEL, LABEL_SUBMIT, REASON_FIELD_TITLE, TITLE_REASON};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Clear,
    Frame,
};

/// Receives the submitted text
pub type SubmitHandler = Box<dyn Fn(String) -> Action>;

/// Focus targets inside the modal, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonFocus {
    Input,
    Cancel,
    Submit,
}

impl ReasonFocus {
    fn next(self) -> Self {
        match self {
            Self::Input => Self::Cancel,
            Self::Cancel => Self::Submit,
            Self::Submit => Self::Input,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Input => Self::Submit,
            Self::Cancel => Self::Input,
            Self::Submit => Self::Cancel,
        }
    }
}

pub struct ReasonModal {
    is_open: bool,
    on_close: Action,
    on_submit: SubmitHandler,
    input: TextInput,
    focus: ReasonFocus,
}

impl ReasonModal {
    pub fn new(on_close: Action, on_submit: SubmitHandler) -> Self {
        Self {
            is_open: false,
            on_close,
            on_submit,
            input: TextInput::new(),
            focus: ReasonFocus::Input,
        }
    }

    /// Apply the caller's visibility; opening always starts from an empty buffer
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.is_open {
            self.input.clear();
            self.focus = ReasonFocus::Input;
        }
        self.is_open = is_open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn focus(&self) -> ReasonFocus {
        self.focus
    }

    /// Close proposal without submitting
    pub fn cancel(&self) -> Action {
        self.on_close.clone()
    }

    /// Submit the buffer as it is, empty included
    pub fn submit(&self) -> Action {
        (self.on_submit)(self.input.value().to_string())
    }

    fn buttons(&self) -> [Button; 2] {
        let mut cancel = Button::new(LABEL_CANCEL)
            .class_name(BUTTON_CANCEL_CLASSES)
            .on_click(self.cancel());
        cancel.set_focused(self.focus == ReasonFocus::Cancel);

        let mut submit = Button::new(LABEL_SUBMIT).on_click(self.submit());
        submit.set_focused(self.focus == ReasonFocus::Submit);

        [cancel, submit]
    }
}

impl Component for ReasonModal {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_open {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Enter => match self.focus {
                ReasonFocus::Input | ReasonFocus::Submit => self.submit(),
                ReasonFocus::Cancel => self.cancel(),
            },
            _ if self.focus == ReasonFocus::Input => {
                self.input.handle_key(key);
                Action::None
            }
            KeyCode::Char(' ') if self.focus == ReasonFocus::Submit => self.submit(),
            KeyCode::Char(' ') => self.cancel(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_open {
            return;
        }

        render_backdrop(f, rect);

        let buttons = self.buttons();
        let button_rows = buttons.iter().map(Button::height).max().unwrap_or(1);
        let area = LayoutManager::centered_rect_lines(50, button_rows + 8, rect);
        f.render_widget(Clear, area);

        let title = Line::from(vec![Span::styled(
            format!(" {} ", TITLE_REASON),
            Style::default().add_modifier(Modifier::BOLD),
        )]);
        let block = dialog_block(title, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [input_area, _, buttons_area, instructions_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(button_rows),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(input_field(&self.input, REASON_FIELD_TITLE), input_area);

        let areas = Layout::horizontal(buttons.iter().map(|b| Constraint::Length(b.width())))
            .flex(Flex::Center)
            .spacing(2)
            .split(buttons_area);
        for (button, area) in buttons.iter().zip(areas.iter()) {
            button.draw(f, *area);
        }

        f.render_widget(
            hint_bar(&[shortcuts::ENTER_SUBMIT, shortcuts::TAB_SWITCH, shortcuts::ESC_CANCEL]),
            instructions_area,
        );
    }
}
