//! Sort keys for the user list.

use crate::model::User;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field the user list is sorted on, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum SortKey {
    /// Sort by display name.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Sort by company name.
    #[serde(rename = "company", alias = "company.name")]
    CompanyName,
}

/// Unrecognised sort key text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort key '{0}': expected 'name' or 'company'")]
pub struct InvalidSortKey(pub String);

impl SortKey {
    /// Toggle to the other key.
    pub fn cycle(self) -> Self {
        match self {
            SortKey::Name => SortKey::CompanyName,
            SortKey::CompanyName => SortKey::Name,
        }
    }

    /// The field of `user` this key selects.
    pub fn field(self, user: &User) -> &str {
        match self {
            SortKey::Name => &user.name,
            SortKey::CompanyName => user.company_name(),
        }
    }

    /// Short label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::CompanyName => "Company",
        }
    }
}

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "company" | "company.name" | "company-name" => Ok(SortKey::CompanyName),
            _ => Err(InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::CompanyName => f.write_str("company"),
        }
    }
}
