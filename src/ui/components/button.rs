//! Styled submit button.
//!
//! A [`Button`] wraps arbitrary line content, starts from the fixed
//! [`BUTTON_BASE_CLASSES`] and appends caller classes. Activating it (Enter or
//! Space while focused) yields the caller's `on_click` action exactly once.

use crate::constants::BUTTON_BASE_CLASSES;
use crate::ui::classes::{join_classes, ClassList, ResolvedClasses};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Role reported by a button, mirroring a form submit control
pub const BUTTON_ROLE: &str = "submit";

#[derive(Debug, Clone)]
pub struct Button {
    content: Line<'static>,
    extra_classes: String,
    resolved: ResolvedClasses,
    on_click: Option<Action>,
    focused: bool,
}

impl Button {
    pub fn new(content: impl Into<Line<'static>>) -> Self {
        Self {
            content: content.into(),
            extra_classes: String::new(),
            resolved: ClassList::parse(BUTTON_BASE_CLASSES).resolve(),
            on_click: None,
            focused: false,
        }
    }

    /// Append classes to the base class list
    #[must_use]
    pub fn class_name(mut self, classes: &str) -> Self {
        self.extra_classes = classes.trim().to_string();
        self.resolved = ClassList::parse(&self.classes()).resolve();
        self
    }

    #[must_use]
    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    /// Full class string: the base classes followed by the caller's
    pub fn classes(&self) -> String {
        join_classes(BUTTON_BASE_CLASSES, &self.extra_classes)
    }

    pub fn resolved(&self) -> &ResolvedClasses {
        &self.resolved
    }

    pub fn role(&self) -> &'static str {
        BUTTON_ROLE
    }

    pub fn content(&self) -> &Line<'static> {
        &self.content
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The action produced by one activation
    pub fn activate(&self) -> Action {
        match &self.on_click {
            Some(action) => action.clone(),
            None => Action::None,
        }
    }

    /// Columns needed to draw the button without truncation
    pub fn width(&self) -> u16 {
        let border = if self.resolved.bordered { 2 } else { 0 };
        let padding = self.resolved.padding.left + self.resolved.padding.right;
        (self.content.width() as u16).saturating_add(padding).saturating_add(border)
    }

    /// Rows needed to draw the button
    pub fn height(&self) -> u16 {
        let border = if self.resolved.bordered { 2 } else { 0 };
        1 + self.resolved.padding.top + self.resolved.padding.bottom + border
    }

    fn display_line(&self) -> Line<'static> {
        if !self.resolved.uppercase {
            return self.content.clone();
        }
        let spans: Vec<Span<'static>> = self
            .content
            .spans
            .iter()
            .map(|span| Span::styled(span.content.to_uppercase(), span.style))
            .collect();
        Line::from(spans)
    }

    /// Draw without requiring mutable access
    pub fn draw(&self, f: &mut Frame, rect: Rect) {
        let style = self.resolved.style(self.focused);
        let mut block = Block::default().padding(self.resolved.padding).style(style);
        if self.resolved.bordered {
            block = block
                .borders(Borders::ALL)
                .border_type(self.resolved.border_type());
        }

        let paragraph = Paragraph::new(self.display_line())
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        f.render_widget(paragraph, rect);
    }
}

impl Component for Button {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.draw(f, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
