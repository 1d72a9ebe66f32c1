//! Multi-select dropdown.
//!
//! The selection is owned by the caller: toggling an option does not change
//! [`MultiSelect::selected_values`], it returns the caller's `on_select` or
//! `on_remove` action built from the proposed new list. The caller applies it
//! with [`MultiSelect::set_selected`].

use super::select_option::SelectOption;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Builds an action from the proposed selection and the option that changed
pub type SelectionHandler = Box<dyn Fn(Vec<SelectOption>, SelectOption) -> Action>;

/// Size and text density of the control, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiSelectLayout {
    /// Fixed width, or the full available width when `None`
    pub width: Option<u16>,
    /// Fixed height, or grow with the chips when `None`
    pub height: Option<u16>,
    /// Blank rows kept below the control
    pub margin_bottom: u16,
    /// Render chips with reduced emphasis
    pub compact: bool,
}

pub struct MultiSelect {
    options: Vec<SelectOption>,
    selected: Vec<SelectOption>,
    placeholder: String,
    on_select: Option<SelectionHandler>,
    on_remove: Option<SelectionHandler>,
    layout: MultiSelectLayout,
    icons: IconService,
    open: bool,
    highlighted: usize,
    focused: bool,
}

impl MultiSelect {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: Vec::new(),
            placeholder: String::new(),
            on_select: None,
            on_remove: None,
            layout: MultiSelectLayout::default(),
            icons: IconService::default(),
            open: false,
            highlighted: 0,
            focused: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    #[must_use]
    pub fn on_select(mut self, handler: SelectionHandler) -> Self {
        self.on_select = Some(handler);
        self
    }

    #[must_use]
    pub fn on_remove(mut self, handler: SelectionHandler) -> Self {
        self.on_remove = Some(handler);
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.highlighted = self.highlighted.min(self.options.len().saturating_sub(1));
    }

    pub fn selected_values(&self) -> &[SelectOption] {
        &self.selected
    }

    pub fn set_selected(&mut self, selected: Vec<SelectOption>) {
        self.selected = selected;
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|o| o.value == value)
    }

    pub fn layout(&self) -> MultiSelectLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: MultiSelectLayout) {
        self.layout = layout;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + self.options.len() - 1) % self.options.len();
        }
    }

    /// Propose selecting or removing the highlighted option
    pub fn toggle_highlighted(&mut self) -> Action {
        let Some(option) = self.options.get(self.highlighted).cloned() else {
            return Action::None;
        };
        if option.disabled {
            return Action::None;
        }

        if self.is_selected(&option.value) {
            let remaining: Vec<SelectOption> =
                self.selected.iter().filter(|o| o.value != option.value).cloned().collect();
            match &self.on_remove {
                Some(handler) => handler(remaining, option),
                None => Action::None,
            }
        } else {
            let mut proposed = self.selected.clone();
            proposed.push(option.clone());
            match &self.on_select {
                Some(handler) => handler(proposed, option),
                None => Action::None,
            }
        }
    }

    /// Propose removing the most recently selected option
    pub fn remove_last(&mut self) -> Action {
        let Some(last) = self.selected.last().cloned() else {
            return Action::None;
        };
        let remaining = self.selected[..self.selected.len() - 1].to_vec();
        match &self.on_remove {
            Some(handler) => handler(remaining, last),
            None => Action::None,
        }
    }

    fn chip_spans(&self) -> Vec<Span<'static>> {
        if self.selected.is_empty() {
            return vec![Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray))];
        }

        let mut chip_style = Style::default().fg(Color::White).bg(Color::Blue);
        if !self.layout.compact {
            chip_style = chip_style.add_modifier(Modifier::BOLD);
        }

        let mut spans = Vec::new();
        for option in &self.selected {
            spans.push(Span::styled(
                format!(" {} {} ", option.label, self.icons.remove()),
                chip_style,
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    /// Rows the control occupies inside `width` columns, excluding the margin
    pub fn control_height(&self, width: u16) -> u16 {
        if let Some(height) = self.layout.height {
            return height;
        }
        let inner = width.saturating_sub(2).max(1) as usize;
        let content: usize = self.chip_spans().iter().map(|s| s.width()).sum();
        let lines = content.div_ceil(inner).max(1);
        lines as u16 + 2
    }

    /// Area of the control inside the space given by the caller
    pub fn control_area(&self, rect: Rect) -> Rect {
        let width = self.layout.width.map_or(rect.width, |w| w.min(rect.width));
        let height = self.control_height(width).min(rect.height);
        Rect::new(rect.x, rect.y, width, height)
    }

    fn render_control(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title_top(Line::from(format!(" {} ", self.icons.dropdown(self.open))).right_aligned());

        let paragraph = Paragraph::new(Line::from(self.chip_spans()))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_menu(&self, f: &mut Frame, control: Rect) {
        let screen = f.area();
        let available = screen.bottom().saturating_sub(control.bottom());
        let height = (self.options.len() as u16 + 2).min(available);
        if height < 3 {
            return;
        }
        let menu_area = Rect::new(control.x, control.bottom(), control.width, height);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mut style = Style::default().fg(Color::White);
                if option.disabled {
                    style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
                } else if i == self.highlighted {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }
                let checkbox = self.icons.checkbox(self.is_selected(&option.value));
                ListItem::new(Line::from(format!("{} {}", checkbox, option.label))).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        let mut state = ListState::default().with_selected((!self.options.is_empty()).then_some(self.highlighted));
        f.render_widget(Clear, menu_area);
        f.render_stateful_widget(list, menu_area, &mut state);
    }
}

impl Component for MultiSelect {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                    self.open();
                    Action::None
                }
                KeyCode::Backspace | KeyCode::Delete => self.remove_last(),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlight_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.highlight_next();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_highlighted(),
            KeyCode::Backspace | KeyCode::Delete => self.remove_last(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let control = self.control_area(rect);
        self.render_control(f, control);
        if self.open {
            self.render_menu(f, control);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.open = false;
    }
}
