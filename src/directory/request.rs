//! Messages exchanged between the view state and the directory worker.

use crate::directory::{DirectoryError, DirectoryService};
use crate::model::{PageNumber, Post, User, UserId};
use chrono::{DateTime, Utc};

/// Which post action issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFetchKind {
    /// Page 1 after a new selection; replaces the post list.
    FirstPage,
    /// A "load more" page; appends to the post list.
    NextPage,
}

/// Identifies an in-flight post request.
///
/// `generation` is the selection generation at the time of the request.
/// A response whose generation no longer matches the view state is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostTicket {
    /// User whose posts are requested.
    pub user_id: UserId,
    /// Page requested, 1-indexed.
    pub page: PageNumber,
    /// Page size sent as `_limit`.
    pub limit: u32,
    /// Selection generation when the request was issued.
    pub generation: u64,
    /// Whether the page replaces or extends the post list.
    pub kind: PostFetchKind,
}

/// A request the view state asks the shell to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRequest {
    /// `GET /users`
    Users,
    /// `GET /posts?userId=..&_limit=..&_page=..`
    Posts(PostTicket),
}

/// Settled outcome of a [`DirectoryRequest`].
#[derive(Debug)]
pub enum DirectoryResponse {
    /// Outcome of `GET /users`.
    Users {
        /// Decoded user list, or why it could not be fetched.
        result: Result<Vec<User>, DirectoryError>,
        /// When the request settled.
        received_at: DateTime<Utc>,
    },
    /// Outcome of one post page request.
    Posts {
        /// Ticket of the request this answers.
        ticket: PostTicket,
        /// Decoded page of posts, or why it could not be fetched.
        result: Result<Vec<Post>, DirectoryError>,
    },
}

impl DirectoryRequest {
    /// Run this request against `service`.
    pub async fn execute<S>(self, service: &S) -> DirectoryResponse
    where
        S: DirectoryService + ?Sized,
    {
        match self {
            DirectoryRequest::Users => DirectoryResponse::Users {
                result: service.fetch_users().await,
                received_at: Utc::now(),
            },
            DirectoryRequest::Posts(ticket) => DirectoryResponse::Posts {
                ticket,
                result: service
                    .fetch_posts(ticket.user_id, ticket.page, ticket.limit)
                    .await,
            },
        }
    }

    /// Ticket of a post request; `None` for the user list.
    pub fn post_ticket(self) -> Option<PostTicket> {
        match self {
            DirectoryRequest::Posts(ticket) => Some(ticket),
            DirectoryRequest::Users => None,
        }
    }

    /// Settle this request as failed without sending it.
    pub fn fail(self, error: DirectoryError) -> DirectoryResponse {
        match self {
            DirectoryRequest::Users => DirectoryResponse::Users {
                result: Err(error),
                received_at: Utc::now(),
            },
            DirectoryRequest::Posts(ticket) => DirectoryResponse::Posts {
                ticket,
                result: Err(error),
            },
        }
    }
}
