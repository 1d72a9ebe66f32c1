//! Pieces shared by the modal surfaces

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::components::text_input::TextInput;

const HINT_SEPARATOR: &str = " • ";
const CURSOR: &str = "█";

/// Rounded, centered-title frame tinted with `color`
pub fn dialog_block<'a>(title: Line<'a>, color: Color) -> Block<'a> {
    let accent = Style::default().fg(color);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(accent)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(accent.add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black))
}

/// Bordered single-line field showing `input` with a block cursor
pub fn input_field<'a>(input: &TextInput, title: &str) -> Paragraph<'a> {
    let value = input.value();
    let byte_offset = value
        .char_indices()
        .nth(input.cursor_position())
        .map_or(value.len(), |(i, _)| i);
    let (head, tail) = value.split_at(byte_offset);

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(format!(" {title} "), Style::default().fg(Color::White)))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(Line::from(vec![
        Span::raw(head.to_owned()),
        Span::styled(CURSOR, Style::default().fg(Color::White)),
        Span::raw(tail.to_owned()),
    ]))
    .block(frame)
    .style(Style::default().fg(Color::White))
}

/// A key hint: highlighted key, its color, then what it does
#[derive(Debug, Clone, Copy)]
pub struct Hint {
    pub key: &'static str,
    pub color: Color,
    pub label: &'static str,
}

/// One centered line of key hints separated by bullets
pub fn hint_bar<'a>(hints: &[Hint]) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(HINT_SEPARATOR, Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", hint.label), Style::default().fg(Color::Gray)));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Dim everything already drawn in `area` so the surface on top reads as modal
pub fn render_backdrop(f: &mut Frame, area: Rect) {
    dim_area(f.buffer_mut(), area);
}

fn dim_area(buf: &mut Buffer, area: Rect) {
    let dimmed = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
    let area = area.intersection(buf.area);
    for position in area.positions() {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_style(dimmed);
        }
    }
}

pub mod shortcuts {
    use super::Hint;
    use ratatui::style::Color;

    pub const ESC_CLOSE: Hint = Hint { key: "Esc", color: Color::Red, label: "Close" };
    pub const ESC_CANCEL: Hint = Hint { key: "Esc", color: Color::Red, label: "Cancel" };
    pub const ENTER_SUBMIT: Hint = Hint { key: "Enter", color: Color::Green, label: "Submit" };
    pub const ENTER_ACTIVATE: Hint = Hint { key: "Enter", color: Color::Green, label: "Activate" };
    pub const TAB_SWITCH: Hint = Hint { key: "Tab", color: Color::Cyan, label: "Switch" };
}
