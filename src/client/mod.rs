//! Remote listing client: the gallery's only network collaborator.
//!
//! This module defines the [`ListingClient`] trait that abstracts the remote
//! file store, plus the `reqwest`-backed [`HttpListingClient`] that talks to a
//! real deployment. The trait seam keeps the view-state controller fully
//! testable with an in-memory fake.
//!
//! Neither implementation retries: retry policy (there is none) belongs to the
//! controller, and timeouts are delegated entirely to the transport.

mod http;
mod wire;

pub use http::HttpListingClient;

use crate::domain::{ListingSnapshot, Result};

/// Abstraction over the remote file store.
///
/// Implementations perform the categorized listing fetch and the delete
/// mutation. Both operations fail with [`MediashelfError::Network`] on a
/// non-2xx status or a transport failure.
///
/// [`MediashelfError::Network`]: crate::domain::MediashelfError::Network
#[allow(async_fn_in_trait)]
pub trait ListingClient {
    /// Fetches the full categorized listing.
    ///
    /// # Errors
    ///
    /// Returns a network error on a non-success HTTP status or transport
    /// failure. No partial result is ever returned.
    async fn fetch_listing(&self) -> Result<ListingSnapshot>;

    /// Deletes one asset by its reference path.
    ///
    /// # Errors
    ///
    /// Returns a network error on a non-success HTTP status or transport
    /// failure.
    async fn delete_asset(&self, path: &str) -> Result<()>;
}
