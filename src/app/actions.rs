//! Actions representing side effects to be executed by the gallery driver.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between pure state transitions and effectful
//! network calls: the driver executes each one against the listing client and
//! feeds the completion back in as a new event.

/// Commands emitted by the event handler for the driver to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the full categorized listing from the remote store.
    ///
    /// Carries the generation assigned when the fetch was requested, so the
    /// completion can be matched against (and stale responses discarded by)
    /// the state it eventually lands in.
    FetchListing {
        /// Monotonic fetch generation, copied into the completion event.
        generation: u64,
    },

    /// Delete one asset on the remote store.
    ///
    /// A successful delete triggers a full refresh; there is no optimistic
    /// local removal.
    DeleteAsset {
        /// Reference path of the asset to delete.
        path: String,
    },
}
