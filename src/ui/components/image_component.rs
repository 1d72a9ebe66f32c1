//! Rotating quote banner.
//!
//! Draws a fixed backdrop image, a dimmed overlay, the logo and the current
//! quote. While mounted, an [`IntervalTimer`] emits [`Action::AdvanceQuote`]
//! every period; dropping the component stops the timer.

use crate::constants::{Quote, BACKDROP_GLYPH, LOGO_LINES, QUOTES, QUOTE_INTERVAL_MS};
use crate::ui::core::{Action, Component, IntervalTimer};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tokio::sync::mpsc;

pub struct ImageComponent {
    current_quote_index: usize,
    timer: IntervalTimer,
}

impl ImageComponent {
    /// Mount with the default 5000 ms rotation
    pub fn mount(action_sender: mpsc::UnboundedSender<Action>) -> Self {
        Self::mount_with_interval(action_sender, Duration::from_millis(QUOTE_INTERVAL_MS))
    }

    /// Mount and start the rotation timer. Requires a Tokio runtime.
    pub fn mount_with_interval(action_sender: mpsc::UnboundedSender<Action>, period: Duration) -> Self {
        Self {
            current_quote_index: 0,
            timer: IntervalTimer::start(period, action_sender, Action::AdvanceQuote),
        }
    }

    pub fn current_quote_index(&self) -> usize {
        self.current_quote_index
    }

    pub fn current_quote(&self) -> &'static Quote {
        &QUOTES[self.current_quote_index]
    }

    pub fn rotation_period(&self) -> Duration {
        self.timer.period()
    }

    pub fn is_rotating(&self) -> bool {
        self.timer.is_running()
    }

    fn advance(&mut self) {
        self.current_quote_index = next_quote_index(self.current_quote_index);
    }

    fn backdrop_lines(area: Rect) -> Vec<Line<'static>> {
        // Diagonal bands give the backdrop some texture
        let shades = [Color::Rgb(30, 58, 95), Color::Rgb(37, 70, 115), Color::Rgb(45, 84, 138)];
        (0..area.height)
            .map(|y| {
                let spans: Vec<Span<'static>> = (0..area.width)
                    .map(|x| {
                        let band = ((x / 4 + y) as usize) % shades.len();
                        Span::styled(BACKDROP_GLYPH, Style::default().fg(shades[band]).bg(Color::Black))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Index of the quote that follows `index`
#[must_use]
pub fn next_quote_index(index: usize) -> usize {
    (index + 1) % QUOTES.len()
}

impl Component for ImageComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::AdvanceQuote => {
                self.advance();
                log::trace!("Quote advanced to {}", self.current_quote_index);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Background image
        f.render_widget(Paragraph::new(Self::backdrop_lines(rect)), rect);

        // Semi-transparent overlay
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                    cell.modifier.insert(Modifier::DIM);
                }
            }
        }

        let quote = self.current_quote();
        let inner = rect.inner(Margin {
            horizontal: 2,
            vertical: 0,
        });
        let [_, logo_area, _, quote_area, author_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(LOGO_LINES.len() as u16),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let logo: Vec<Line> = LOGO_LINES.iter().map(|l| Line::from(*l)).collect();
        f.render_widget(
            Paragraph::new(logo)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD).remove_modifier(Modifier::DIM)),
            logo_area,
        );

        f.render_widget(
            Paragraph::new(format!("\u{201c}{}\u{201d}", quote.text))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::White).add_modifier(Modifier::ITALIC).remove_modifier(Modifier::DIM)),
            quote_area,
        );

        f.render_widget(
            Paragraph::new(format!("- {}", quote.author))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray).remove_modifier(Modifier::DIM)),
            author_area,
        );
    }

    fn is_focusable(&self) -> bool {
        false
    }
}
