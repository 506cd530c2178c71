//! Directory actions and response application (pure state transitions).
//!
//! Each action mutates the view state and returns the request the shell must
//! send, if any. Responses are applied with [`apply_response`]. No function
//! here performs I/O, so every transition is testable without a network or a
//! terminal.
//!
//! # Loading and errors
//!
//! All actions share one loading indicator (in-flight count > 0) and one
//! error slot. A failure overwrites the slot. Only a successful LoadUsers
//! clears it.
//!
//! # Stale post responses
//!
//! SelectUser bumps the selection generation and stamps it on the ticket.
//! A post response whose ticket generation differs from the current one
//! belongs to an earlier selection: it settles the loading count and is
//! otherwise dropped.

use crate::directory::{DirectoryRequest, DirectoryResponse, PostFetchKind, PostTicket};
use crate::model::{FetchFailure, PageNumber, UserId};
use crate::state::ViewState;
use tracing::{debug, warn};

/// What happened to an applied response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The response changed posts, users or the error slot.
    Applied,
    /// The response belonged to an earlier selection and was dropped.
    Stale,
}

/// Start loading the full user list.
pub fn load_users(state: &mut ViewState) -> DirectoryRequest {
    state.in_flight += 1;
    DirectoryRequest::Users
}

/// Select `user_id` and request page 1 of their posts.
///
/// Resets the post list, page counter and post scroll before the request is
/// issued. Returns `None` (state unchanged) if the id is not in the current
/// user list.
pub fn select_user(state: &mut ViewState, user_id: UserId) -> Option<DirectoryRequest> {
    if !state.users.iter().any(|user| user.id == user_id) {
        debug!(user_id = user_id.get(), "Ignoring selection of unknown user");
        return None;
    }

    state.selected_user = Some(user_id);
    state.posts.clear();
    state.page = PageNumber::first();
    state.post_scroll = 0;
    state.selection_generation += 1;
    state.in_flight += 1;

    Some(DirectoryRequest::Posts(PostTicket {
        user_id,
        page: state.page,
        limit: state.page_size,
        generation: state.selection_generation,
        kind: PostFetchKind::FirstPage,
    }))
}

/// Select the user under the row cursor.
pub fn select_highlighted_user(state: &mut ViewState) -> Option<DirectoryRequest> {
    let user_id = state.highlighted_user()?.id;
    select_user(state, user_id)
}

/// Request the next page of posts for the selected user.
///
/// Only valid when a user is selected and at least one post is shown;
/// otherwise returns `None` and leaves the state untouched. The page counter
/// advances before the request and is not rolled back on failure.
pub fn load_more_posts(state: &mut ViewState) -> Option<DirectoryRequest> {
    if !state.can_load_more() {
        return None;
    }
    let user_id = state.selected_user?;

    state.page = state.page.next();
    state.in_flight += 1;

    Some(DirectoryRequest::Posts(PostTicket {
        user_id,
        page: state.page,
        limit: state.page_size,
        generation: state.selection_generation,
        kind: PostFetchKind::NextPage,
    }))
}

/// Apply a settled response to the state.
pub fn apply_response(state: &mut ViewState, response: DirectoryResponse) -> ResponseOutcome {
    state.in_flight = state.in_flight.saturating_sub(1);

    match response {
        DirectoryResponse::Users {
            result,
            received_at,
        } => {
            match result {
                Ok(users) => {
                    debug!(count = users.len(), "Users loaded");
                    state.users = users;
                    state.users_received_at = Some(received_at);
                    state.error = None;
                    state.refresh_view();
                }
                Err(err) => {
                    warn!(error = %err, "Failed to load users");
                    state.error = Some(FetchFailure::UserListFetchFailed);
                }
            }
            ResponseOutcome::Applied
        }
        DirectoryResponse::Posts { ticket, result } => {
            if ticket.generation != state.selection_generation {
                debug!(
                    user_id = ticket.user_id.get(),
                    page = ticket.page.get(),
                    generation = ticket.generation,
                    current = state.selection_generation,
                    "Discarding stale post response"
                );
                return ResponseOutcome::Stale;
            }

            match (ticket.kind, result) {
                (PostFetchKind::FirstPage, Ok(posts)) => {
                    debug!(user_id = ticket.user_id.get(), count = posts.len(), "Posts loaded");
                    state.posts = posts;
                }
                (PostFetchKind::NextPage, Ok(posts)) => {
                    debug!(
                        user_id = ticket.user_id.get(),
                        page = ticket.page.get(),
                        count = posts.len(),
                        "More posts loaded"
                    );
                    state.posts.extend(posts);
                }
                (PostFetchKind::FirstPage, Err(err)) => {
                    warn!(user_id = ticket.user_id.get(), error = %err, "Failed to load posts");
                    state.error = Some(FetchFailure::PostListFetchFailed);
                }
                (PostFetchKind::NextPage, Err(err)) => {
                    warn!(
                        user_id = ticket.user_id.get(),
                        page = ticket.page.get(),
                        error = %err,
                        "Failed to load more posts"
                    );
                    state.error = Some(FetchFailure::PostPageFetchFailed);
                }
            }
            ResponseOutcome::Applied
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "directory_handler_tests.rs"]
mod tests;
