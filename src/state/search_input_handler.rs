//! Search input handling (pure state transitions).
//!
//! Editing functions take a `SearchInput` by value and return the edited one.
//! `handle_search_edit` applies an edit to the view state, which recomputes the
//! visible user list on every keystroke (no debounce).

use crate::state::{FocusPane, SearchInput, ViewState};

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(input: SearchInput, ch: char) -> SearchInput {
    let offset = input.byte_offset(input.cursor());
    let (mut text, cursor) = input.into_parts();
    text.insert(offset, ch);
    SearchInput::from_parts(text, cursor + 1)
}

/// Delete the character before the cursor.
///
/// No-op when the cursor is at 0.
pub fn handle_backspace(input: SearchInput) -> SearchInput {
    if input.cursor() == 0 {
        return input;
    }
    let offset = input.byte_offset(input.cursor() - 1);
    let (mut text, cursor) = input.into_parts();
    text.remove(offset);
    SearchInput::from_parts(text, cursor - 1)
}

/// Move the cursor left. Saturates at 0.
pub fn handle_cursor_left(input: SearchInput) -> SearchInput {
    let cursor = input.cursor().saturating_sub(1);
    let (text, _) = input.into_parts();
    SearchInput::from_parts(text, cursor)
}

/// Move the cursor right. Saturates at the end of the text.
pub fn handle_cursor_right(input: SearchInput) -> SearchInput {
    let cursor = (input.cursor() + 1).min(input.char_len());
    let (text, _) = input.into_parts();
    SearchInput::from_parts(text, cursor)
}

/// Empty the search term.
pub fn clear_search(_input: SearchInput) -> SearchInput {
    SearchInput::default()
}

/// Edit applied to the search input from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Empty the term.
    Clear,
}

/// Apply `edit` to the state's search term and recompute the view.
///
/// Cursor moves leave the term unchanged but still go through the same path.
pub fn handle_search_edit(state: &mut ViewState, edit: SearchEdit) {
    let input = state.search.clone();
    let edited = match edit {
        SearchEdit::Insert(ch) => handle_char_input(input, ch),
        SearchEdit::Backspace => handle_backspace(input),
        SearchEdit::CursorLeft => handle_cursor_left(input),
        SearchEdit::CursorRight => handle_cursor_right(input),
        SearchEdit::Clear => clear_search(input),
    };
    state.set_search(edited);
}

/// Give keyboard focus to the search input.
pub fn activate_search_input(state: &mut ViewState) {
    state.focus = FocusPane::Search;
}

/// Return keyboard focus to the user list. The term is kept.
pub fn leave_search_input(state: &mut ViewState) {
    state.focus = FocusPane::Users;
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
