//! # Handled Set
//!
//! Identifiers of notifications already shown to the user.
//!
//! - Append-only: there is no removal operation
//! - Owned by the caller and passed into every cycle
//! - Persistence is optional and lives in `storage`

use std::collections::BTreeSet;

/// Notification identifiers already displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandledSet {
    /// Uses BTreeSet for deterministic ordering.
    ids: BTreeSet<String>,
}

impl HandledSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `id` was already displayed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Record `id` as displayed. Returns `false` if it already was.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Number of displayed notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing was displayed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for HandledSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
