/// Which form input currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Location,
    Term,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Location => Focus::Term,
            Focus::Term => Focus::Location,
        }
    }
}

/// Single-line text input with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Default)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut prev = self.cursor - 1;
        while prev > 0 && !self.text.is_char_boundary(prev) {
            prev -= 1;
        }
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let start = self.cursor;
        let mut end = start + 1;
        while end < self.text.len() && !self.text.is_char_boundary(end) {
            end += 1;
        }
        self.text.drain(start..end);
    }

    pub fn left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        while self.cursor > 0 && !self.text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        self.cursor += 1;
        while self.cursor < self.text.len() && !self.text.is_char_boundary(self.cursor) {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(text: &str) -> InputField {
        let mut f = InputField::default();
        for ch in text.chars() {
            f.insert(ch);
        }
        f
    }

    #[test]
    fn insert_advances_past_multibyte_chars() {
        let f = field_with("café");
        assert_eq!(f.text(), "café");
        assert_eq!(f.cursor(), "café".len());
    }

    #[test]
    fn backspace_removes_whole_chars() {
        let mut f = field_with("café");
        f.backspace();
        assert_eq!(f.text(), "caf");
        f.backspace();
        assert_eq!(f.text(), "ca");
    }

    #[test]
    fn cursor_moves_stay_on_boundaries() {
        let mut f = field_with("aé");
        f.left();
        assert!(f.text().is_char_boundary(f.cursor()));
        f.left();
        assert_eq!(f.cursor(), 0);
        f.right();
        assert!(f.text().is_char_boundary(f.cursor()));
    }

    #[test]
    fn delete_at_cursor_removes_forward() {
        let mut f = field_with("aéb");
        f.home();
        f.right();
        f.delete();
        assert_eq!(f.text(), "ab");
    }

    #[test]
    fn focus_toggles_between_fields() {
        assert_eq!(Focus::Location.next(), Focus::Term);
        assert_eq!(Focus::Term.next(), Focus::Location);
    }
}
