use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Translate a key press into the action the caller should dispatch
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume actions addressed to this component, passing the rest through
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// Whether the component takes part in focus traversal
    fn is_focusable(&self) -> bool {
        true
    }

    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
