//! Dashboard state machine (pure).
//!
//! All state transitions are functions of the current state and an input
//! (key action, search edit, or settled response), testable without a
//! terminal or a network.

pub mod cursor_handler;
pub mod directory_handler;
pub mod recompute;
pub mod search_input;
pub mod search_input_handler;
pub mod view_state;

// Re-export for convenience
pub use cursor_handler::{handle_cursor_action, handle_post_scroll};
pub use directory_handler::{
    apply_response, load_more_posts, load_users, select_highlighted_user, select_user,
    ResponseOutcome,
};
pub use recompute::recompute_view;
pub use search_input::SearchInput;
pub use search_input_handler::{handle_search_edit, SearchEdit};
pub use view_state::{FocusPane, ViewState, DEFAULT_PAGE_SIZE};
