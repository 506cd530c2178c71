//! Row cursor and post pane scrolling (pure state transitions).

use crate::model::KeyAction;
use crate::state::ViewState;

/// Move the user-list cursor for a navigation action.
///
/// Non-navigation actions are ignored. The cursor stays within the visible
/// list and is 0 when the list is empty.
pub fn handle_cursor_action(state: &mut ViewState, action: KeyAction) {
    let last = state.visible_users.len().saturating_sub(1);
    state.cursor = match action {
        KeyAction::CursorUp => state.cursor.saturating_sub(1),
        KeyAction::CursorDown => (state.cursor + 1).min(last),
        KeyAction::CursorTop => 0,
        KeyAction::CursorBottom => last,
        _ => return,
    };
}

/// Scroll the post pane.
///
/// Line actions (`CursorUp`/`CursorDown`) move one line; page actions move
/// `page_height` lines. `max_scroll` is the last useful offset.
pub fn handle_post_scroll(state: &mut ViewState, action: KeyAction, page_height: u16, max_scroll: u16) {
    let page = page_height.max(1);
    let next = match action {
        KeyAction::CursorUp => state.post_scroll.saturating_sub(1),
        KeyAction::CursorDown => state.post_scroll.saturating_add(1),
        KeyAction::ScrollPostsUp => state.post_scroll.saturating_sub(page),
        KeyAction::ScrollPostsDown => state.post_scroll.saturating_add(page),
        KeyAction::CursorTop => 0,
        KeyAction::CursorBottom => max_scroll,
        _ => return,
    };
    state.post_scroll = next.min(max_scroll);
}
