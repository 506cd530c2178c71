//! User records as served by the Directory Service.

use crate::model::UserId;
use serde::{Deserialize, Serialize};

/// A user from the directory.
///
/// Immutable once fetched. Fields the dashboard does not show (phone,
/// website, geo coordinates, catch phrase) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Directory-assigned user id.
    pub id: UserId,
    /// Display name; searched and sortable.
    pub name: String,
    /// Email address; searched.
    pub email: String,
    /// Postal address.
    pub address: Address,
    /// Employer; its name is sortable.
    pub company: Company,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name.
    pub street: String,
    /// Suite or apartment.
    pub suite: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
}

/// Employer of a user. Only the name is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company name.
    pub name: String,
}

impl User {
    /// Build a user from its displayed fields.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        address: Address,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address,
            company: Company {
                name: company_name.into(),
            },
        }
    }

    /// Name of the user's company.
    pub fn company_name(&self) -> &str {
        &self.company.name
    }
}

impl Address {
    /// Build an address from its four parts.
    pub fn new(
        street: impl Into<String>,
        suite: impl Into<String>,
        city: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            suite: suite.into(),
            city: city.into(),
            zipcode: zipcode.into(),
        }
    }

    /// Single-line form: `street, suite, city, zipcode`.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}
