//! Draft text state for the input box.

/// State for a text input, managing content and cursor position.
///
/// The cursor is a character index (not a byte index), so editing is safe
/// for any UTF-8 content.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content.
    content: String,
    /// Cursor position (character index).
    cursor: usize,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding `content` with the cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if the content is empty once surrounding whitespace is ignored.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Take the content, clearing the state.
    pub fn take(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        content
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    ///
    /// `\r\n` and lone `\r` are normalized to `\n`.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_index(self.cursor);
        self.content.insert_str(at, &normalized);
        self.cursor += normalized.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start of the current line.
    pub fn move_home(&mut self) {
        let before: Vec<char> = self.content.chars().take(self.cursor).collect();
        self.cursor = before
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |pos| pos + 1);
    }

    /// Move cursor to the end of the current line.
    pub fn move_end(&mut self) {
        let to_newline = self
            .content
            .chars()
            .skip(self.cursor)
            .position(|c| c == '\n');
        self.cursor = match to_newline {
            Some(offset) => self.cursor + offset,
            None => self.char_count(),
        };
    }
}
