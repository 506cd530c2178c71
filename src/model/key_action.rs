//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // User list navigation
    /// Move the row cursor up one user. Default: k/↑
    CursorUp,
    /// Move the row cursor down one user. Default: j/↓
    CursorDown,
    /// Jump to the first user. Default: g/Home
    CursorTop,
    /// Jump to the last user. Default: G/End
    CursorBottom,

    // Directory actions
    /// Select the user under the cursor and fetch page 1 of their posts. Default: Enter
    SelectUser,
    /// Fetch and append the next page of posts. Default: m
    LoadMorePosts,
    /// Re-fetch the user list. Default: r
    Refresh,

    // Search and sort
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search term. Default: Esc
    ClearSearch,
    /// Toggle sort key between name and company name. Default: s
    CycleSort,

    // Focus and scrolling
    /// Cycle focus between the user list and the post pane. Default: Tab
    CycleFocus,
    /// Scroll the post pane down. Default: Ctrl+d/Page Down
    ScrollPostsDown,
    /// Scroll the post pane up. Default: Ctrl+u/Page Up
    ScrollPostsUp,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
