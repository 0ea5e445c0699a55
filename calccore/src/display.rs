//! The text currently being typed

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Empty the buffer, returning what it held.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
