//! Derivation of the visible user list (pure).

use crate::model::{SortKey, User};
use std::cmp::Ordering;

/// Filter `users` by `search_term` and sort by `sort_key`.
///
/// A user is kept when its name or email contains the term as a
/// case-insensitive substring; the empty term keeps everyone. The result is
/// sorted ascending on the selected field with plain string comparison. Equal
/// fields fall back to ascending user id, so the output is fully determined
/// by the inputs.
///
/// Never mutates `users`; always returns a fresh vector.
pub fn recompute_view(users: &[User], search_term: &str, sort_key: SortKey) -> Vec<User> {
    let needle = search_term.to_lowercase();

    let mut visible: Vec<User> = users
        .iter()
        .filter(|user| matches_search(user, &needle))
        .cloned()
        .collect();

    visible.sort_by(|a, b| compare_users(a, b, sort_key));
    visible
}

/// Whether `user` matches an already lower-cased search needle.
pub fn matches_search(user: &User, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty()
        || user.name.to_lowercase().contains(lowercase_needle)
        || user.email.to_lowercase().contains(lowercase_needle)
}

/// Ordering used by [`recompute_view`].
pub fn compare_users(a: &User, b: &User, sort_key: SortKey) -> Ordering {
    sort_key
        .field(a)
        .cmp(sort_key.field(b))
        .then_with(|| a.id.cmp(&b.id))
}
