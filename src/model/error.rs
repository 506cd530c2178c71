//! Error types for the userdash application.
//!
//! Two families live here:
//!
//! - [`FetchFailure`] - the user-facing taxonomy. Every Directory Service
//!   failure collapses into one of three fixed messages. No status code or
//!   payload is ever shown; the underlying error is logged instead.
//! - [`AppError`] - the top-level error returned from `main`, wrapping the
//!   infrastructure errors of each layer so they compose via `?`.
//!
//! # Recovery Strategy
//!
//! Fetch failures are **non-fatal**: they are caught where the response is
//! applied to the view state and turned into the error slot shown in the
//! header. The operator retries by repeating the action (refresh, reselect).
//! Configuration, logging and terminal errors are fatal and propagate to
//! `main`.

use crate::config::ConfigError;
use crate::directory::{DirectoryError, WorkerError};
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// User-facing fetch failure.
///
/// Exactly one variant per view-model action that talks to the Directory
/// Service. The `Display` text is the message rendered in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FetchFailure {
    /// `GET /users` failed.
    #[error("Failed to load users")]
    UserListFetchFailed,

    /// First page of posts for a newly selected user failed.
    #[error("Failed to load posts")]
    PostListFetchFailed,

    /// A follow-up page of posts failed.
    #[error("Failed to load more posts")]
    PostPageFetchFailed,
}

/// Top-level application error.
///
/// All layer errors convert via `From`, so `main` can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed, or held bad values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Directory client could not be constructed (e.g. malformed base URL).
    #[error("Directory client error: {0}")]
    Directory(#[from] DirectoryError),

    /// Background directory thread could not be started.
    #[error("Directory worker error: {0}")]
    Worker(#[from] WorkerError),

    /// Terminal or event loop failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
