//! Single-line prompt with a character cursor.

#[derive(Debug, Default)]
pub struct InputLine {
    chars: Vec<char>,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Take the text out, leaving the prompt empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.chars).into_iter().collect()
    }

    /// Whitespace-only input counts as empty.
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|c| c.is_whitespace())
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputLine {
        let mut line = InputLine::new();
        text.chars().for_each(|c| line.insert(c));
        line
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut line = typed("hod cse");
        line.home();
        line.right();
        line.right();
        line.right();
        line.insert('?');
        assert_eq!(line.text(), "hod? cse");
        line.backspace();
        line.delete();
        assert_eq!(line.text(), "hodcse");
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut line = typed("₹1.2 lakh");
        line.end();
        line.left();
        line.backspace();
        assert_eq!(line.text(), "₹1.2 lah");
        line.home();
        line.delete();
        assert_eq!(line.text(), "1.2 lah");
    }

    #[test]
    fn test_take_and_blank() {
        let mut line = typed("  ");
        assert!(line.is_blank());
        line.insert('x');
        assert!(!line.is_blank());
        assert_eq!(line.take(), "  x");
        assert!(line.is_blank());
        assert_eq!(line.cursor(), 0);
    }
}
