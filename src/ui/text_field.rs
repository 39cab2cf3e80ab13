//! Editable text buffers for the title, content and search inputs.
//!
//! A field owns its buffer, a byte-offset cursor that always sits on a
//! grapheme boundary, and a focus flag. Unfocused fields ignore keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

pub const CURSOR_MARKER: &str = "▌";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
    focused: bool,
    multiline: bool,
    char_limit: usize,
}

impl Default for TextField {
    fn default() -> Self {
        Self::single_line(100)
    }
}

impl TextField {
    pub fn single_line(char_limit: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: false,
            multiline: false,
            char_limit,
        }
    }

    pub fn multi_line(char_limit: usize) -> Self {
        Self {
            multiline: true,
            ..Self::single_line(char_limit)
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the buffer, truncated to the char limit; the cursor moves to the end.
    pub fn set_value(&mut self, value: &str) {
        let mut buffer: String = value.chars().take(self.char_limit).collect();
        if !self.multiline {
            buffer = buffer.replace(['\r', '\n'], " ");
        }
        self.cursor = buffer.len();
        self.buffer = buffer;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns true when the buffer or cursor changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up if self.multiline => self.move_vertical(-1),
            KeyCode::Down if self.multiline => self.move_vertical(1),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => false,
        }
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.buffer.chars().count() >= self.char_limit {
            return false;
        }
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_grapheme_boundary(&self.buffer, self.cursor);
        self.buffer.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        let next = next_grapheme_boundary(&self.buffer, self.cursor);
        self.buffer.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = prev_grapheme_boundary(&self.buffer, self.cursor);
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.cursor = next_grapheme_boundary(&self.buffer, self.cursor);
        true
    }

    pub fn move_home(&mut self) -> bool {
        let start = line_start(&self.buffer, self.cursor);
        if start == self.cursor {
            return false;
        }
        self.cursor = start;
        true
    }

    pub fn move_end(&mut self) -> bool {
        let end = line_end(&self.buffer, self.cursor);
        if end == self.cursor {
            return false;
        }
        self.cursor = end;
        true
    }

    fn move_vertical(&mut self, direction: i8) -> bool {
        let start = line_start(&self.buffer, self.cursor);
        let column = self.buffer[start..self.cursor].graphemes(true).count();
        let target_start = if direction < 0 {
            if start == 0 {
                return false;
            }
            line_start(&self.buffer, start - 1)
        } else {
            let end = line_end(&self.buffer, self.cursor);
            if end == self.buffer.len() {
                return false;
            }
            end + 1
        };
        self.cursor = position_for_column(&self.buffer, target_start, column);
        true
    }

    /// The buffer with a cursor marker inserted, for focused rendering.
    pub fn with_cursor_marker(&self) -> String {
        let mut text = self.buffer.clone();
        text.insert_str(self.cursor, CURSOR_MARKER);
        text
    }
}

fn prev_grapheme_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .grapheme_indices(true)
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn next_grapheme_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .graphemes(true)
        .next()
        .map(|grapheme| cursor + grapheme.len())
        .unwrap_or(text.len())
}

fn line_start(text: &str, cursor: usize) -> usize {
    text[..cursor].rfind('\n').map(|idx| idx + 1).unwrap_or(0)
}

fn line_end(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .find('\n')
        .map(|idx| cursor + idx)
        .unwrap_or(text.len())
}

fn position_for_column(text: &str, start: usize, column: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .grapheme_indices(true)
        .nth(column)
        .map(|(idx, _)| start + idx)
        .unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn focused(mut field: TextField) -> TextField {
        field.focus();
        field
    }

    fn type_text(field: &mut TextField, text: &str) {
        for ch in text.chars() {
            field.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn unfocused_field_ignores_keys() {
        let mut field = TextField::single_line(10);
        assert!(!field.handle_key(key(KeyCode::Char('a'))));
        assert!(field.is_empty());
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = focused(TextField::single_line(50));
        type_text(&mut field, "Groceries");
        assert_eq!(field.value(), "Groceries");
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "Grocerie");
        assert_eq!(field.cursor(), field.value().len());
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut field = focused(TextField::single_line(3));
        type_text(&mut field, "abcdef");
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn set_value_truncates_and_flattens_single_line() {
        let mut field = TextField::single_line(5);
        field.set_value("a\nbcdefg");
        assert_eq!(field.value(), "a bcd");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn enter_inserts_newline_only_when_multiline() {
        let mut single = focused(TextField::single_line(10));
        assert!(!single.handle_key(key(KeyCode::Enter)));

        let mut multi = focused(TextField::multi_line(10));
        type_text(&mut multi, "a");
        multi.handle_key(key(KeyCode::Enter));
        type_text(&mut multi, "b");
        assert_eq!(multi.value(), "a\nb");
    }

    #[test]
    fn cursor_moves_over_graphemes() {
        let mut field = focused(TextField::single_line(10));
        field.set_value("née");
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "ée");
        field.handle_key(key(KeyCode::Delete));
        assert_eq!(field.value(), "e");
    }

    #[test]
    fn vertical_movement_keeps_column() {
        let mut field = focused(TextField::multi_line(100));
        field.set_value("abcd\nxy\nlonger line");
        field.handle_key(key(KeyCode::Up));
        assert_eq!(field.cursor(), "abcd\n".len() + 2);
        field.handle_key(key(KeyCode::Up));
        assert_eq!(field.cursor(), 2);
        assert!(!field.handle_key(key(KeyCode::Up)));
        field.handle_key(key(KeyCode::Down));
        field.handle_key(key(KeyCode::Down));
        assert_eq!(field.cursor(), "abcd\nxy\n".len() + 2);
    }

    #[test]
    fn home_and_end_stay_on_current_line() {
        let mut field = focused(TextField::multi_line(100));
        field.set_value("first\nsecond");
        field.handle_key(key(KeyCode::Home));
        assert_eq!(field.cursor(), "first\n".len());
        field.handle_key(key(KeyCode::End));
        assert_eq!(field.cursor(), field.value().len());
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut field = focused(TextField::single_line(10));
        let ctrl_s = KeyEvent::new_with_kind(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert!(!field.handle_key(ctrl_s));
        assert!(field.is_empty());
    }

    #[test]
    fn cursor_marker_sits_at_cursor() {
        let mut field = focused(TextField::single_line(10));
        field.set_value("ab");
        field.handle_key(key(KeyCode::Left));
        assert_eq!(field.with_cursor_marker(), "a▌b");
    }
}
