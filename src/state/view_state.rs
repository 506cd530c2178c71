//! View state and its read accessors.
//!
//! ViewState is the single state container for the dashboard. It holds the
//! data fetched from the Directory Service, the derived user view, and the
//! small amount of UI state the terminal needs. Transitions live in sibling
//! modules (`directory_handler`, `search_input_handler`, `cursor_handler`);
//! each takes `&mut ViewState` and returns whatever I/O the shell must do.

use crate::model::{FetchFailure, PageNumber, Post, SortKey, User, UserId};
use crate::state::recompute::recompute_view;
use crate::state::SearchInput;
use chrono::{DateTime, Utc};

/// Default number of posts requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Which area receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// User list: cursor keys move the row highlight.
    #[default]
    Users,
    /// Search input: printable keys edit the search term.
    Search,
    /// Post pane: cursor keys scroll the posts.
    Posts,
}

/// Dashboard state. Pure data, no side effects.
///
/// # Invariants
///
/// - `visible_users` always equals
///   `recompute_view(&users, search.text(), sort_key)`; it is replaced
///   wholesale and never edited in place.
/// - `cursor < visible_users.len()` whenever `visible_users` is non-empty.
/// - `selection_generation` only grows; every SelectUser bumps it.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Full user list as last fetched.
    pub(crate) users: Vec<User>,
    /// When the current user list arrived.
    pub(crate) users_received_at: Option<DateTime<Utc>>,
    /// Filtered and sorted projection of `users`.
    pub(crate) visible_users: Vec<User>,
    /// Free-text search term with editing cursor.
    pub(crate) search: SearchInput,
    /// Active sort field.
    pub(crate) sort_key: SortKey,
    /// User whose posts are shown.
    pub(crate) selected_user: Option<UserId>,
    /// Posts accumulated across pages for `selected_user`.
    pub(crate) posts: Vec<Post>,
    /// Last page requested for `selected_user`.
    pub(crate) page: PageNumber,
    /// Posts requested per page.
    pub(crate) page_size: u32,
    /// Requests issued but not yet settled.
    pub(crate) in_flight: usize,
    /// Single shared error slot; each failure overwrites it.
    pub(crate) error: Option<FetchFailure>,
    /// Bumped by every SelectUser. Post responses carrying an older value are stale.
    pub(crate) selection_generation: u64,
    /// Highlighted row in `visible_users`.
    pub(crate) cursor: usize,

    /// Keyboard focus.
    pub focus: FocusPane,
    /// Vertical scroll offset of the post pane, in lines.
    pub post_scroll: u16,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl ViewState {
    /// Empty state with the given sort key and page size.
    ///
    /// A page size of 0 is bumped to 1.
    pub fn new(sort_key: SortKey, page_size: u32) -> Self {
        Self {
            users: Vec::new(),
            users_received_at: None,
            visible_users: Vec::new(),
            search: SearchInput::default(),
            sort_key,
            selected_user: None,
            posts: Vec::new(),
            page: PageNumber::first(),
            page_size: page_size.max(1),
            in_flight: 0,
            error: None,
            selection_generation: 0,
            cursor: 0,
            focus: FocusPane::default(),
            post_scroll: 0,
            help_visible: false,
        }
    }

    /// Full user list as fetched.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Filtered/sorted view of the user list.
    pub fn visible_users(&self) -> &[User] {
        &self.visible_users
    }

    /// When the current user list arrived.
    pub fn users_received_at(&self) -> Option<DateTime<Utc>> {
        self.users_received_at
    }

    /// Search input with its editing cursor.
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    /// Search term as typed.
    pub fn search_term(&self) -> &str {
        self.search.text()
    }

    /// Active sort key.
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Id of the user whose posts are shown.
    pub fn selected_user_id(&self) -> Option<UserId> {
        self.selected_user
    }

    /// The selected user's record, looked up in the full list.
    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected_user?;
        self.users.iter().find(|user| user.id == id)
    }

    /// Posts accumulated across pages for the selected user.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Last page requested for the selected user.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Posts requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// True while any request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Last fetch failure, if any.
    pub fn error(&self) -> Option<FetchFailure> {
        self.error
    }

    /// Error text for the header, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|failure| failure.to_string())
    }

    /// Current selection generation; post tickets carrying another value are stale.
    pub fn selection_generation(&self) -> u64 {
        self.selection_generation
    }

    /// Index of the highlighted row in the visible list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// User under the row cursor.
    pub fn highlighted_user(&self) -> Option<&User> {
        self.visible_users.get(self.cursor)
    }

    /// Whether the "Load More" control is offered.
    pub fn can_load_more(&self) -> bool {
        self.selected_user.is_some() && !self.posts.is_empty()
    }

    /// Switch the sort key and recompute the view.
    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.refresh_view();
    }

    /// Toggle between the two sort keys.
    pub fn cycle_sort_key(&mut self) {
        self.set_sort_key(self.sort_key.cycle());
    }

    /// Replace the search input and recompute the view.
    pub fn set_search(&mut self, search: SearchInput) {
        self.search = search;
        self.refresh_view();
    }

    /// Recompute `visible_users` from the current inputs and clamp the cursor.
    pub(crate) fn refresh_view(&mut self) {
        self.visible_users = recompute_view(&self.users, self.search.text(), self.sort_key);
        self.cursor = self.cursor.min(self.visible_users.len().saturating_sub(1));
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SortKey::default(), DEFAULT_PAGE_SIZE)
    }
}
