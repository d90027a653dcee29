//! Async driver tying the reducer to the listing client.
//!
//! [`Gallery`] owns the state record and a [`ListingClient`], dispatches
//! events through the pure reducer, executes the emitted actions against the
//! client, and feeds each completion back in as a new event until the queue
//! drains. Because `dispatch` takes `&mut self` and processes its queue to
//! completion, no two transitions can interleave and at most one
//! fetch/delete-refresh cycle is in flight at a time.

use std::collections::VecDeque;

use crate::app::handler::{handle_event, Event};
use crate::app::{Action, AppState};
use crate::client::ListingClient;
use crate::domain::Result;
use crate::ui::viewmodel::GalleryViewModel;
use crate::Config;

/// The gallery view-state controller.
///
/// Generic over the client so hosts wire in the HTTP implementation while
/// tests drive the full event loop with an in-memory fake.
#[derive(Debug)]
pub struct Gallery<C: ListingClient> {
    state: AppState,
    client: C,
}

impl<C: ListingClient> Gallery<C> {
    /// Creates a gallery for a configured deployment.
    #[must_use]
    pub fn new(config: &Config, client: C) -> Self {
        Self {
            state: AppState::new(config),
            client,
        }
    }

    /// Read-only access to the current state record.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Computes the render-ready view model for the current state.
    #[must_use]
    pub fn viewmodel(&self) -> GalleryViewModel {
        self.state.compute_viewmodel()
    }

    /// Runs the mount transition: the initial listing fetch.
    ///
    /// Fetch failures are absorbed into state (loading cleared, prior
    /// snapshot kept); they never surface as an `Err` here.
    ///
    /// # Errors
    ///
    /// Propagates only reducer-level failures, which no current transition
    /// produces.
    pub async fn mount(&mut self) -> Result<bool> {
        self.dispatch(Event::Refresh).await
    }

    /// Dispatches one event and runs it to completion.
    ///
    /// Follow-up actions execute sequentially; each completion is queued as a
    /// new event until nothing is left. Returns whether anything visible
    /// changed, so hosts can skip redundant redraws.
    ///
    /// # Errors
    ///
    /// Propagates only reducer-level failures; network failures are turned
    /// into `FetchFailed`/`DeleteFailed` events and handled in state.
    pub async fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut redraw = false;
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let (changed, actions) = handle_event(&mut self.state, &event)?;
            redraw |= changed;
            for action in actions {
                queue.push_back(self.run_action(action).await);
            }
        }

        Ok(redraw)
    }

    /// Executes one side effect and returns its completion event.
    async fn run_action(&mut self, action: Action) -> Event {
        match action {
            Action::FetchListing { generation } => match self.client.fetch_listing().await {
                Ok(snapshot) => Event::ListingLoaded { generation, snapshot },
                Err(e) => Event::FetchFailed {
                    generation,
                    error: e.to_string(),
                },
            },
            Action::DeleteAsset { path } => match self.client.delete_asset(&path).await {
                Ok(()) => Event::DeleteCompleted { path },
                Err(e) => Event::DeleteFailed {
                    path,
                    error: e.to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ListingSnapshot, MediashelfError};
    use std::cell::RefCell;

    /// In-memory stand-in for the remote store, recording every call.
    #[derive(Debug, Default)]
    struct FakeClient {
        listing: RefCell<ListingSnapshot>,
        fail_fetch: bool,
        fail_delete: bool,
        fetch_calls: RefCell<u32>,
        deleted: RefCell<Vec<String>>,
    }

    impl FakeClient {
        fn with_images(count: usize) -> Self {
            Self {
                listing: RefCell::new(ListingSnapshot {
                    images: (0..count).map(|i| format!("img-{i}.png")).collect(),
                    ..Default::default()
                }),
                ..Default::default()
            }
        }
    }

    impl ListingClient for FakeClient {
        async fn fetch_listing(&self) -> crate::domain::Result<ListingSnapshot> {
            *self.fetch_calls.borrow_mut() += 1;
            if self.fail_fetch {
                return Err(MediashelfError::Network("listing fetch returned 500".into()));
            }
            Ok(self.listing.borrow().clone())
        }

        async fn delete_asset(&self, path: &str) -> crate::domain::Result<()> {
            if self.fail_delete {
                return Err(MediashelfError::Network("delete returned 500".into()));
            }
            self.deleted.borrow_mut().push(path.to_string());
            self.listing
                .borrow_mut()
                .images
                .retain(|p| p != path);
            Ok(())
        }
    }

    #[tokio::test]
    async fn mount_populates_the_store() {
        let mut gallery = Gallery::new(&Config::default(), FakeClient::with_images(25));
        let redraw = gallery.mount().await.unwrap();
        assert!(redraw);
        assert!(!gallery.state().loading);
        assert_eq!(gallery.state().store.len(Category::Images), 25);
        assert_eq!(gallery.viewmodel().items.len(), 20);
    }

    #[tokio::test]
    async fn mount_failure_is_absorbed() {
        let client = FakeClient {
            fail_fetch: true,
            ..FakeClient::with_images(25)
        };
        let mut gallery = Gallery::new(&Config::default(), client);

        // Loading must end and no error escapes the refresh entry point.
        gallery.mount().await.unwrap();
        assert!(!gallery.state().loading);
        assert!(gallery.state().store.is_empty());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_snapshot() {
        let mut gallery = Gallery::new(&Config::default(), FakeClient::with_images(5));
        gallery.mount().await.unwrap();

        gallery.client.fail_fetch = true;
        gallery.dispatch(Event::Refresh).await.unwrap();
        assert!(!gallery.state().loading);
        assert_eq!(gallery.state().store.len(Category::Images), 5);
    }

    #[tokio::test]
    async fn delete_refetches_exactly_once() {
        let mut gallery = Gallery::new(&Config::default(), FakeClient::with_images(25));
        gallery.mount().await.unwrap();
        assert_eq!(*gallery.client.fetch_calls.borrow(), 1);

        gallery
            .dispatch(Event::DeleteRequested("img-3.png".to_string()))
            .await
            .unwrap();

        assert_eq!(gallery.client.deleted.borrow().as_slice(), ["img-3.png"]);
        assert_eq!(*gallery.client.fetch_calls.borrow(), 2);
        assert!(!gallery.state().loading);
        assert_eq!(gallery.state().store.len(Category::Images), 24);
        assert_eq!(gallery.state().current_page, 1);
    }

    #[tokio::test]
    async fn failed_delete_leaves_the_listing_alone() {
        let mut gallery = Gallery::new(&Config::default(), FakeClient::with_images(25));
        gallery.mount().await.unwrap();

        gallery.client.fail_delete = true;
        gallery
            .dispatch(Event::DeleteRequested("img-3.png".to_string()))
            .await
            .unwrap();

        // No refetch happened beyond the mount and nothing was removed.
        assert_eq!(*gallery.client.fetch_calls.borrow(), 1);
        assert!(!gallery.state().loading);
        assert_eq!(gallery.state().store.len(Category::Images), 25);
    }

    #[tokio::test]
    async fn full_user_flow_across_tabs_and_pages() {
        let mut gallery = Gallery::new(&Config::default(), FakeClient::with_images(25));
        gallery.mount().await.unwrap();

        gallery.dispatch(Event::NextPage).await.unwrap();
        assert_eq!(gallery.viewmodel().items.len(), 5);

        // Switching tabs keeps page 2; the empty videos tab renders an empty
        // window rather than clamping.
        gallery
            .dispatch(Event::TabSelected(Category::Videos))
            .await
            .unwrap();
        assert_eq!(gallery.state().current_page, 2);
        assert!(gallery.viewmodel().items.is_empty());

        gallery
            .dispatch(Event::TabSelected(Category::Images))
            .await
            .unwrap();
        gallery.dispatch(Event::PreviousPage).await.unwrap();
        assert_eq!(gallery.viewmodel().items.len(), 20);
    }
}
