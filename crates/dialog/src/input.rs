/// Single-line editor backing the prompt dialog's entry field.
#[derive(Default)]
pub(crate) struct InputState {
    pub buffer: Vec<char>,
    pub cursor: usize,
}

impl InputState {
    pub fn from_text(value: &str) -> Self {
        let buffer: Vec<char> = value.chars().collect();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn current(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.len() {
            return;
        }
        self.buffer.remove(self.cursor);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn kill_to_end(&mut self) {
        self.buffer.truncate(self.cursor);
    }

    pub fn delete_word_back(&mut self) {
        while self.cursor > 0 && self.buffer[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
        while self.cursor > 0 && !self.buffer[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InputState;

    #[test]
    fn editing_round_trip() {
        let mut input = InputState::from_text("helo");
        input.move_left();
        input.insert_char('l');
        assert_eq!(input.current(), "hello");
        input.move_end();
        input.backspace();
        assert_eq!(input.current(), "hell");
    }

    #[test]
    fn delete_word_back_removes_trailing_word_and_spacing() {
        let mut input = InputState::from_text("one two  ");
        input.delete_word_back();
        assert_eq!(input.current(), "one ");
        input.delete_word_back();
        assert_eq!(input.current(), "");
        input.delete_word_back();
        assert_eq!(input.current(), "");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut input = InputState::from_text("ab");
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.delete();
        assert_eq!(input.current(), "ab");
    }

    #[test]
    fn kill_to_end_truncates_at_cursor() {
        let mut input = InputState::from_text("keep drop");
        input.cursor = 4;
        input.kill_to_end();
        assert_eq!(input.current(), "keep");
    }
}
