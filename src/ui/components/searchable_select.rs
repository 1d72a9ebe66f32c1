//! Single-value select with a type-to-filter menu.
//!
//! Like the multi-select, the current value belongs to the caller. Picking or
//! clearing returns the caller's `on_change` action and the caller applies
//! the result with [`SearchableSelect::set_selected`].

use super::select_option::SelectOption;
use super::text_input::TextInput;
use crate::constants::PROJECT_NO_OPTIONS;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Builds an action from the newly picked option, `None` when cleared
pub type ChangeHandler = Box<dyn Fn(Option<SelectOption>) -> Action>;

/// What a menu row needs to know to pick its style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionState {
    pub focused: bool,
    pub selected: bool,
    pub empty_value: bool,
}

pub type OptionStyler = fn(OptionState) -> Style;

fn plain_option_style(state: OptionState) -> Style {
    if state.focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

pub struct SearchableSelect {
    options: Vec<SelectOption>,
    selected: Option<SelectOption>,
    placeholder: String,
    on_change: Option<ChangeHandler>,
    option_style: OptionStyler,
    query: TextInput,
    icons: IconService,
    open: bool,
    highlighted: Option<usize>,
    focused: bool,
}

impl SearchableSelect {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: None,
            placeholder: String::new(),
            on_change: None,
            option_style: plain_option_style,
            query: TextInput::new(),
            icons: IconService::default(),
            open: false,
            highlighted: None,
            focused: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    #[must_use]
    pub fn on_change(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    #[must_use]
    pub fn option_style(mut self, styler: OptionStyler) -> Self {
        self.option_style = styler;
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.highlighted = self.first_selectable();
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, selected: Option<SelectOption>) {
        self.selected = selected;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn query(&self) -> &str {
        self.query.value()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the menu with an empty filter, highlighting the current value
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        let selected_index = self.selected.as_ref().and_then(|selected| {
            self.filtered_options()
                .iter()
                .position(|o| o.value == selected.value && o.is_selectable())
        });
        self.highlighted = selected_index.or_else(|| self.first_selectable());
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Options whose label contains the filter, ignoring case
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        let needle = self.query.value().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Index into [`Self::filtered_options`] of the highlighted row
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.highlighted.and_then(|i| self.filtered_options().get(i).copied())
    }

    fn first_selectable(&self) -> Option<usize> {
        self.filtered_options().iter().position(|o| o.is_selectable())
    }

    fn step_highlight(&mut self, forward: bool) {
        let filtered = self.filtered_options();
        let len = filtered.len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        let start = self.highlighted.unwrap_or(if forward { len - 1 } else { 0 });
        let next = (1..=len)
            .map(|step| {
                if forward {
                    (start + step) % len
                } else {
                    (start + len - step % len) % len
                }
            })
            .find(|&i| filtered[i].is_selectable());
        self.highlighted = next;
    }

    pub fn highlight_next(&mut self) {
        self.step_highlight(true);
    }

    pub fn highlight_previous(&mut self) {
        self.step_highlight(false);
    }

    fn emit(&self, option: Option<SelectOption>) -> Action {
        match &self.on_change {
            Some(handler) => handler(option),
            None => Action::None,
        }
    }

    /// Propose the highlighted option and close the menu
    pub fn pick_highlighted(&mut self) -> Action {
        let Some(option) = self.highlighted_option().filter(|o| o.is_selectable()).cloned() else {
            return Action::None;
        };
        self.close();
        self.emit(Some(option))
    }

    /// Propose clearing the current value
    pub fn clear(&mut self) -> Action {
        if self.selected.is_none() {
            return Action::None;
        }
        self.emit(None)
    }

    fn control_line(&self) -> Line<'static> {
        if self.open {
            return Line::from(vec![
                Span::styled(format!("{} ", self.icons.search()), Style::default().fg(Color::Cyan)),
                Span::raw(self.query.value().to_string()),
                Span::styled("█", Style::default().fg(Color::White)),
            ]);
        }
        match &self.selected {
            Some(option) => Line::from(Span::styled(option.label.clone(), Style::default().fg(Color::White))),
            None => Line::from(Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray))),
        }
    }

    fn render_menu(&self, f: &mut Frame, control: Rect) {
        let filtered = self.filtered_options();
        let screen = f.area();
        let available = screen.bottom().saturating_sub(control.bottom());
        let rows = filtered.len().max(1) as u16;
        let height = (rows + 2).min(available);
        if height < 3 {
            return;
        }
        let menu_area = Rect::new(control.x, control.bottom(), control.width, height);

        let items: Vec<ListItem> = if filtered.is_empty() {
            vec![ListItem::new(Line::from(PROJECT_NO_OPTIONS)).style(Style::default().fg(Color::DarkGray))]
        } else {
            filtered
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let state = OptionState {
                        focused: self.highlighted == Some(i),
                        selected: self.selected.as_ref().is_some_and(|s| s.value == option.value),
                        empty_value: option.has_empty_value(),
                    };
                    let mut style = (self.option_style)(state);
                    if option.disabled {
                        style = style.add_modifier(Modifier::DIM);
                    }
                    ListItem::new(Line::from(option.label.clone())).style(style)
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        // Scrolls the highlighted row into view
        let mut state = ListState::default().with_selected(self.highlighted);
        f.render_widget(Clear, menu_area);
        f.render_stateful_widget(list, menu_area, &mut state);
    }
}

impl Component for SearchableSelect {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Down => {
                    self.open();
                    Action::None
                }
                KeyCode::Backspace | KeyCode::Delete => self.clear(),
                KeyCode::Char(_) => {
                    self.open();
                    if self.query.handle_key(key) {
                        self.highlighted = self.first_selectable();
                    }
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::None
            }
            KeyCode::Up => {
                self.highlight_previous();
                Action::None
            }
            KeyCode::Down => {
                self.highlight_next();
                Action::None
            }
            KeyCode::Enter => self.pick_highlighted(),
            _ => {
                if self.query.handle_key(key) {
                    self.highlighted = self.first_selectable();
                }
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let control = Rect::new(rect.x, rect.y, rect.width, rect.height.min(3));
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title_top(Line::from(format!(" {} ", self.icons.dropdown(self.open))).right_aligned());
        f.render_widget(Paragraph::new(self.control_line()).block(block), control);

        if self.open {
            self.render_menu(f, control);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.close();
    }
}
