//! Assignee picker built on [`MultiSelect`].
//!
//! Presentation depends only on how many assignees are selected, see
//! [`assignee_style`].

use super::multi_select::{MultiSelect, MultiSelectLayout, SelectionHandler};
use super::select_option::SelectOption;
use crate::constants::{
    ASSIGNEE_FONT_COMPACT_PX, ASSIGNEE_FONT_DEFAULT_PX, ASSIGNEE_HEIGHT_SINGLE_PX, ASSIGNEE_MARGIN_WIDE_PX,
    ASSIGNEE_PLACEHOLDER, ASSIGNEE_WIDTH_NARROW_PX, ASSIGNEE_WIDTH_WIDE_PX,
};
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::units::CssLength;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Presentation parameters for a given selection size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssigneeStyle {
    pub font_size: CssLength,
    pub width: CssLength,
    pub margin_bottom: CssLength,
    pub height: CssLength,
}

impl AssigneeStyle {
    /// Smaller fonts render chips without emphasis
    pub fn is_compact(&self) -> bool {
        matches!(self.font_size, CssLength::Px(px) if px < ASSIGNEE_FONT_DEFAULT_PX)
    }

    pub fn layout(&self) -> MultiSelectLayout {
        MultiSelectLayout {
            width: self.width.to_columns(),
            height: self.height.to_rows().map(|rows| rows.max(3)),
            margin_bottom: self.margin_bottom.to_rows().unwrap_or(0),
            compact: self.is_compact(),
        }
    }
}

/// Style for `selected_count` selected assignees
#[must_use]
pub fn assignee_style(selected_count: usize) -> AssigneeStyle {
    match selected_count {
        0 => AssigneeStyle {
            font_size: CssLength::Px(ASSIGNEE_FONT_DEFAULT_PX),
            width: CssLength::Px(ASSIGNEE_WIDTH_NARROW_PX),
            margin_bottom: CssLength::Px(0),
            height: CssLength::Px(ASSIGNEE_HEIGHT_SINGLE_PX),
        },
        1 => AssigneeStyle {
            font_size: CssLength::Px(ASSIGNEE_FONT_COMPACT_PX),
            width: CssLength::Px(ASSIGNEE_WIDTH_NARROW_PX),
            margin_bottom: CssLength::Px(0),
            height: CssLength::Px(ASSIGNEE_HEIGHT_SINGLE_PX),
        },
        _ => AssigneeStyle {
            font_size: CssLength::Px(ASSIGNEE_FONT_COMPACT_PX),
            width: CssLength::Px(ASSIGNEE_WIDTH_WIDE_PX),
            margin_bottom: CssLength::Px(ASSIGNEE_MARGIN_WIDE_PX),
            height: CssLength::Auto,
        },
    }
}

pub struct MultiSelectAssignee {
    select: MultiSelect,
}

impl MultiSelectAssignee {
    pub fn new(options: Vec<SelectOption>, on_select: SelectionHandler, on_remove: SelectionHandler) -> Self {
        let mut select = MultiSelect::new(options)
            .placeholder(ASSIGNEE_PLACEHOLDER)
            .on_select(on_select)
            .on_remove(on_remove);
        select.set_layout(assignee_style(0).layout());
        Self { select }
    }

    pub fn options(&self) -> &[SelectOption] {
        self.select.options()
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.select.set_options(options);
    }

    pub fn selected_values(&self) -> &[SelectOption] {
        self.select.selected_values()
    }

    /// Apply the caller's selection and restyle for its size
    pub fn set_selected_values(&mut self, selected: Vec<SelectOption>) {
        let style = assignee_style(selected.len());
        self.select.set_selected(selected);
        self.select.set_layout(style.layout());
    }

    pub fn style(&self) -> AssigneeStyle {
        assignee_style(self.select.selected_values().len())
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.select.set_icons(icons);
    }

    pub fn is_open(&self) -> bool {
        self.select.is_open()
    }

    /// Rows taken in a column of `width` cells, including the bottom margin
    pub fn required_height(&self, width: u16) -> u16 {
        let layout = self.select.layout();
        let width = layout.width.map_or(width, |w| w.min(width));
        self.select.control_height(width) + layout.margin_bottom
    }
}

impl Component for MultiSelectAssignee {
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
