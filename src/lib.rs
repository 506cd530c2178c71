//! userdash
//!
//! Terminal dashboard for browsing a user directory served over HTTP: fetch
//! users, filter and sort them locally, and page through the posts of the
//! selected user.
//!
//! The crate follows a Pure Core / Impure Shell split. `model` and `state`
//! are pure; `directory` and `view` do the network and terminal I/O.

pub mod config;
pub mod directory;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
