//! Page footer: route labels above a copyright line.

use crate::constants::{FOOTER_DEFAULT_BRAND, FOOTER_RIGHTS};
use crate::ui::core::{Action, Component};
use crate::utils::datetime::current_year;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    brand_name: String,
    routes: Vec<String>,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self {
            brand_name: FOOTER_DEFAULT_BRAND.to_string(),
            routes: Vec::new(),
        }
    }

    #[must_use]
    pub fn brand_name(mut self, brand_name: &str) -> Self {
        self.brand_name = brand_name.to_string();
        self
    }

    #[must_use]
    pub fn routes(mut self, routes: Vec<String>) -> Self {
        self.routes = routes;
        self
    }

    pub fn brand(&self) -> &str {
        &self.brand_name
    }

    pub fn route_labels(&self) -> &[String] {
        &self.routes
    }

    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {}. {}", year, self.brand_name, FOOTER_RIGHTS)
    }

    /// Rows needed to draw the footer
    pub fn height(&self) -> u16 {
        let routes = if self.routes.is_empty() { 0 } else { 1 };
        routes + 2
    }

    fn routes_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, route) in self.routes.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(route.clone(), Style::default().fg(Color::Gray)));
        }
        Line::from(spans)
    }
}

impl Component for Footer {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [routes_area, copyright_area] = Layout::vertical([
            Constraint::Length(if self.routes.is_empty() { 0 } else { 1 }),
            Constraint::Length(1),
        ])
        .areas(inner);

        if !self.routes.is_empty() {
            f.render_widget(Paragraph::new(self.routes_line()).alignment(Alignment::Center), routes_area);
        }

        f.render_widget(
            Paragraph::new(self.copyright_line(current_year()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            copyright_area,
        );
    }

    fn is_focusable(&self) -> bool {
        false
    }
}
