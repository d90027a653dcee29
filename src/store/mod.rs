//! Category store holding the last successfully fetched listing.
//!
//! The store is the single owner of the three categorized sequences derived
//! from the most recent fetch. It is deliberately minimal: snapshots are
//! installed wholesale and read back per category. The store never recomputes
//! pagination or triggers refreshes; both are the controller's responsibility.

use crate::domain::{Category, ListingSnapshot};

/// In-memory holder for the current [`ListingSnapshot`].
///
/// A replacement is all-or-nothing: there is no incremental merge and no
/// partial category update. A failed fetch therefore leaves the previous
/// snapshot fully intact.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    snapshot: ListingSnapshot,
}

impl ListingStore {
    /// Creates an empty store, as on mount before the first fetch resolves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically installs a new snapshot for all three categories.
    pub fn replace(&mut self, snapshot: ListingSnapshot) {
        self.snapshot = snapshot;
    }

    /// Returns the ordered asset references for one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        self.snapshot.get(category)
    }

    /// Returns the number of references in one category.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.snapshot.len(category)
    }

    /// Returns `true` if every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Read-only view of the full current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &ListingSnapshot {
        &self.snapshot
    }
}
