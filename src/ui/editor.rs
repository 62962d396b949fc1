//! Minimal text buffer backing the title and content editors.

/// Lines of text plus a cursor. Columns count `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
    single_line: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::multi_line("")
    }
}

impl TextBuffer {
    /// Buffer with the cursor at the end of `text`.
    pub fn multi_line(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let row = lines.len() - 1;
        let col = lines[row].chars().count();
        Self {
            lines,
            row,
            col,
            single_line: false,
        }
    }

    /// Buffer that ignores newlines; pasted newlines become spaces.
    pub fn single_line(text: &str) -> Self {
        let text = text.replace('\n', " ");
        Self {
            col: text.chars().count(),
            lines: vec![text],
            row: 0,
            single_line: true,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(row, col)` of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let idx = self.byte_index();
        self.lines[self.row].insert(idx, ch);
        self.col += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| *ch != '\r') {
            if ch == '\n' && self.single_line {
                self.insert_char(' ');
            } else {
                self.insert_char(ch);
            }
        }
    }

    pub fn insert_newline(&mut self) {
        if self.single_line {
            return;
        }
        let idx = self.byte_index();
        let rest = self.lines[self.row].split_off(idx);
        self.row += 1;
        self.lines.insert(self.row, rest);
        self.col = 0;
    }

    /// Delete the char before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let idx = self.byte_index();
            self.lines[self.row].remove(idx);
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&current);
        }
    }

    /// Delete the char under the cursor, joining with the next line at EOL.
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let idx = self.byte_index();
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(self.col)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::TextBuffer;

    #[test]
    fn round_trips_text() {
        let buffer = TextBuffer::multi_line("# Title\n\nbody");
        assert_eq!(buffer.text(), "# Title\n\nbody");
        assert_eq!(buffer.cursor(), (2, 4));
    }

    #[test]
    fn newline_splits_and_backspace_joins() {
        let mut buffer = TextBuffer::multi_line("hello");
        buffer.move_left();
        buffer.move_left();
        buffer.insert_newline();
        assert_eq!(buffer.text(), "hel\nlo");
        assert_eq!(buffer.cursor(), (1, 0));
        buffer.backspace();
        assert_eq!(buffer.text(), "hello");
        assert_eq!(buffer.cursor(), (0, 3));
    }

    #[test]
    fn handles_multibyte_chars() {
        let mut buffer = TextBuffer::multi_line("café");
        buffer.backspace();
        buffer.insert_char('e');
        assert_eq!(buffer.text(), "cafe");
    }

    #[test]
    fn single_line_flattens_newlines() {
        let mut buffer = TextBuffer::single_line("a");
        buffer.insert_newline();
        buffer.insert_str("b\nc");
        assert_eq!(buffer.text(), "ab c");
    }

    #[test]
    fn delete_at_end_of_line_joins_next() {
        let mut buffer = TextBuffer::multi_line("ab\ncd");
        buffer.move_up();
        buffer.move_end();
        buffer.delete();
        assert_eq!(buffer.text(), "abcd");
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buffer = TextBuffer::multi_line("short\nmuch longer line");
        buffer.move_up();
        assert_eq!(buffer.cursor(), (0, 5));
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 5));
        buffer.move_home();
        assert_eq!(buffer.cursor(), (1, 0));
    }
}
