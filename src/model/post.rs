//! Posts and post pagination.

use crate::model::{PostId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Directory-assigned post id.
    pub id: PostId,
    /// Author, as `userId` on the wire.
    pub user_id: UserId,
    /// One-line title.
    pub title: String,
    /// Body text; may span several lines.
    pub body: String,
}

impl Post {
    /// Build a post from its fields.
    pub fn new(
        id: PostId,
        user_id: UserId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// 1-indexed page number for post pagination.
///
/// Page numbers start at 1 and only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub fn first() -> Self {
        Self(NonZeroU32::MIN)
    }

    /// Smart constructor: `None` for page 0.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// The page after this one. Saturates at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The page number as sent in `_page`.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
