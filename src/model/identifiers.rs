//! Core identifier newtypes.
//!
//! Directory Service identifiers are positive integers assigned externally.
//! They are wrapped so user and post ids cannot be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a user, assigned by the Directory Service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw directory id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id as sent to the directory.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a post. Unique within its owning user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wrap a raw directory id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id as sent to the directory.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
