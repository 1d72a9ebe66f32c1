//! Cursor-aware single-line text buffer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable text with a cursor measured in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor_position = value.chars().count();
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.buffer.chars().take(char_index).map(char::len_utf8).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor_position);
        self.buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_position - 1);
        self.buffer.remove(byte_pos);
        self.cursor_position -= 1;
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor_position >= self.buffer.chars().count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_position);
        self.buffer.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.buffer.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Apply an editing key. Returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.buffer.chars().count();
                false
            }
            _ => false,
        }
    }
}
