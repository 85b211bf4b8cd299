/// What the open prompt is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    AddDescription,
    AddDueDate { description: String },
    MarkCompleted,
    DeleteTask,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddDescription => "Enter task description",
            Self::AddDueDate { .. } => "Enter due date (optional, format: yyyy-MM-dd)",
            Self::MarkCompleted => "Enter task description to mark as completed",
            Self::DeleteTask => "Enter task description to delete",
        }
    }
}

/// Single-line input buffer. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct PromptState {
    pub kind: Option<PromptKind>,
    pub buffer: String,
    pub cursor: usize,
}

impl PromptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    pub fn open(&mut self, kind: PromptKind) {
        self.kind = Some(kind);
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Closes the prompt and hands back what was typed.
    pub fn take(&mut self) -> Option<(PromptKind, String)> {
        let kind = self.kind.take()?;
        let input = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        Some((kind, input))
    }

    pub fn close(&mut self) {
        self.kind = None;
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> PromptState {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::AddDescription);
        for c in text.chars() {
            prompt.insert_char(c);
        }
        prompt
    }

    #[test]
    fn test_open_resets_buffer() {
        let mut prompt = typed("leftover");
        prompt.open(PromptKind::DeleteTask);

        assert!(prompt.is_open());
        assert!(prompt.buffer.is_empty());
        assert_eq!(prompt.cursor, 0);
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut prompt = typed("milk");
        prompt.backspace();
        assert_eq!(prompt.buffer, "mil");
        assert_eq!(prompt.cursor, 3);

        prompt.move_cursor_home();
        prompt.backspace();
        assert_eq!(prompt.buffer, "mil");
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut prompt = typed("Bymilk");
        prompt.move_cursor_home();
        prompt.move_cursor_right();
        prompt.move_cursor_right();
        prompt.insert_char(' ');
        prompt.move_cursor_left();
        prompt.move_cursor_left();
        prompt.insert_char('u');

        assert_eq!(prompt.buffer, "Buy milk");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut prompt = typed("xmilk");
        prompt.move_cursor_home();
        prompt.delete();
        assert_eq!(prompt.buffer, "milk");

        prompt.move_cursor_end();
        prompt.delete();
        assert_eq!(prompt.buffer, "milk");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut prompt = typed("café");
        prompt.move_cursor_left();
        assert_eq!(prompt.cursor, 3);
        prompt.move_cursor_right();
        assert_eq!(prompt.cursor, prompt.buffer.len());

        prompt.backspace();
        assert_eq!(prompt.buffer, "caf");
    }

    #[test]
    fn test_take_closes_prompt() {
        let mut prompt = typed("Buy milk");
        let (kind, input) = prompt.take().unwrap();

        assert_eq!(kind, PromptKind::AddDescription);
        assert_eq!(input, "Buy milk");
        assert!(!prompt.is_open());
        assert!(prompt.take().is_none());
    }
}
