//! Domain model types (pure).
//!
//! Records decoded from the Directory Service plus the small value types the
//! view state is built from.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod post;
pub mod sort_key;
pub mod user;

// Re-export for convenience
pub use error::{AppError, FetchFailure};
pub use identifiers::{PostId, UserId};
pub use key_action::KeyAction;
pub use post::{PageNumber, Post};
pub use sort_key::{InvalidSortKey, SortKey};
pub use user::{Address, Company, User};
