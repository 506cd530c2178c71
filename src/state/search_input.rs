//! Search term with an editing cursor.

/// Free-text search term being edited.
///
/// `cursor` counts characters, not bytes, and is always within
/// `0..=text.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Input holding `text` with the cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current search term.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when no term is entered.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of character index `index`, or the text length past the end.
    pub(crate) fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    pub(crate) fn into_parts(self) -> (String, usize) {
        (self.text, self.cursor)
    }

    pub(crate) fn from_parts(text: String, cursor: usize) -> Self {
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }
}
