/// The text field an autocomplete widget is bound to.
///
/// The widget reads it after each keystroke and overwrites it when a
/// suggestion is confirmed.
pub trait TextInput {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

/// Single-line editable buffer with a byte-level cursor kept on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    value: String,
    /// Byte-level cursor position in `value`.
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the char under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn delete_word_back(&mut self) {
        // Trailing spaces first, then back to the previous space
        while self.value[..self.cursor].ends_with(' ') {
            self.delete_back();
        }
        while self.cursor > 0 && !self.value[..self.cursor].ends_with(' ') {
            self.delete_back();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Split around the cursor: text before, char under the cursor, text after.
    pub fn split_at_cursor(&self) -> (&str, Option<&str>, &str) {
        let before = &self.value[..self.cursor];
        match self.value[self.cursor..].chars().next() {
            Some(c) => {
                let end = self.cursor + c.len_utf8();
                (before, Some(&self.value[self.cursor..end]), &self.value[end..])
            }
            None => (before, None, ""),
        }
    }
}

impl TextInput for LineBuffer {
    fn text(&self) -> &str {
        &self.value
    }

    /// Replaces the whole value and parks the cursor at the end.
    fn set_text(&mut self, text: String) {
        self.value = text;
        self.cursor = self.value.len();
    }
}

impl From<&str> for LineBuffer {
    fn from(value: &str) -> Self {
        let mut buf = Self::new();
        buf.set_text(value.to_string());
        buf
    }
}
