//! Directory Service access (impure shell).
//!
//! This module provides everything that talks to the remote user/post API:
//! - [`DirectoryService`] trait, the seam between the worker and HTTP
//! - [`HttpDirectory`], the reqwest-backed implementation
//! - [`DirectoryWorker`], a background thread that runs requests off the UI thread
//! - [`DirectoryRequest`] / [`DirectoryResponse`], the messages exchanged with it

use crate::model::{PageNumber, Post, User, UserId};
use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub mod request;
pub mod worker;

pub use http::{HttpDirectory, DEFAULT_BASE_URL};
pub use request::{DirectoryRequest, DirectoryResponse, PostFetchKind, PostTicket};
pub use worker::{DirectoryWorker, WorkerError};

/// Errors from a Directory Service call.
///
/// These never reach the screen. The view state maps each failed action to a
/// fixed [`crate::model::FetchFailure`] and the details go to the log file.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Base URL could not be parsed.
    #[error("Invalid directory base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The URL text as configured.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },

    /// Base URL parsed but cannot carry a path (e.g. `mailto:`).
    #[error("Directory base URL '{0}' is not an http(s) URL")]
    UnsupportedBaseUrl(String),

    /// Transport, TLS or body decode failure.
    #[error("Directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Directory returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL including query.
        url: String,
    },

    /// Background worker is gone; the request was never sent.
    #[error("Directory worker is not running")]
    WorkerUnavailable,
}

/// Read-only access to the user/post directory.
///
/// Implemented by [`HttpDirectory`] for production and by in-memory fakes in
/// tests.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetch the full user collection.
    async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// Fetch one page of a user's posts.
    ///
    /// `page` is 1-indexed; `limit` is the page size.
    async fn fetch_posts(
        &self,
        user_id: UserId,
        page: PageNumber,
        limit: u32,
    ) -> Result<Vec<Post>, DirectoryError>;
}
