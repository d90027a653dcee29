//! Event handling and state transition logic.
//!
//! This module implements the pure reducer that processes user actions and
//! network completions, translating them into state changes and side-effect
//! actions. It is the only place gallery state is mutated, which makes every
//! transition unit-testable without a rendering surface or a live server.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host UI or from completed client calls
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for the driver to execute
//!
//! # Loading discipline
//!
//! While `loading` is set, every navigation, tab, page-input, and delete event
//! is rejected; only fetch completions and preview selections pass through.
//! `loading` exits unconditionally when the newest fetch completes, success or
//! failure.

use crate::app::{Action, AppState};
use crate::domain::pagination::has_next_page;
use crate::domain::{is_document, Category, ListingSnapshot, Result};

/// Events triggered by user input or completed network operations.
///
/// Each event represents a discrete occurrence that may change state and emit
/// actions. The driver processes events strictly sequentially, so transitions
/// never interleave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Starts a full listing fetch (mount or manual refresh).
    Refresh,

    /// Switches the active tab. The current page is intentionally not reset,
    /// so a page number valid on one category may land past the end of
    /// another; the window then renders empty.
    TabSelected(Category),

    /// Advances to the next page of the active category.
    NextPage,

    /// Returns to the previous page.
    PreviousPage,

    /// Replaces the raw page-input buffer with what the user has typed so
    /// far. Not validated until committed.
    PageInputChanged(String),

    /// Commits the page-input buffer (edit-complete key). Rejection surfaces
    /// a validation message and leaves the current page untouched.
    CommitPageInput,

    /// Selects an asset for inline preview. Ignored unless the reference has
    /// a document suffix.
    PreviewSelected(String),

    /// Requests deletion of one asset.
    DeleteRequested(String),

    /// A listing fetch resolved with a snapshot.
    ListingLoaded {
        /// Generation assigned when this fetch was started.
        generation: u64,
        /// The complete three-category result.
        snapshot: ListingSnapshot,
    },

    /// A listing fetch failed; the prior snapshot stays installed.
    FetchFailed {
        /// Generation assigned when this fetch was started.
        generation: u64,
        /// Human-readable failure description, logged only.
        error: String,
    },

    /// A delete mutation succeeded; a full refresh follows.
    DeleteCompleted {
        /// Reference path of the deleted asset.
        path: String,
    },

    /// A delete mutation failed; state is left unchanged apart from the
    /// loading flag.
    DeleteFailed {
        /// Reference path of the asset that could not be deleted.
        path: String,
        /// Human-readable failure description, logged only.
        error: String,
    },
}

/// Processes an event, mutates gallery state, and returns actions to execute.
///
/// Returns a `(redraw, actions)` pair: `redraw` reports whether anything
/// visible changed, `actions` lists the side effects the driver must run.
/// Rejected events (wrong mode, out-of-bounds navigation, input while
/// loading) return `(false, vec![])` and leave state untouched.
///
/// # Errors
///
/// Reserved for state transitions that cannot be expressed as a rejected
/// event; every current transition catches its own failures (network errors
/// arrive as events, validation failures land in `page_error`).
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Refresh => {
            state.loading = true;
            state.fetch_generation += 1;
            tracing::debug!(generation = state.fetch_generation, "listing fetch requested");
            Ok((
                true,
                vec![Action::FetchListing {
                    generation: state.fetch_generation,
                }],
            ))
        }
        Event::TabSelected(category) => {
            if state.loading {
                return Ok((false, vec![]));
            }
            tracing::debug!(tab = category.label(), "tab selected");
            state.active_tab = *category;
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let len = state.active_assets().len();
            if state.loading || !has_next_page(len, state.current_page, state.page_size) {
                return Ok((false, vec![]));
            }
            state.current_page += 1;
            state.page_error = None;
            Ok((true, vec![]))
        }
        Event::PreviousPage => {
            if state.loading || state.current_page <= 1 {
                return Ok((false, vec![]));
            }
            state.current_page -= 1;
            state.page_error = None;
            Ok((true, vec![]))
        }
        Event::PageInputChanged(value) => {
            if state.loading {
                return Ok((false, vec![]));
            }
            state.page_input.clone_from(value);
            Ok((true, vec![]))
        }
        Event::CommitPageInput => {
            if state.loading {
                return Ok((false, vec![]));
            }
            match state.commit_page_input() {
                Ok(()) => Ok((true, vec![])),
                Err(e) => {
                    tracing::debug!(input = %state.page_input, error = %e, "page input rejected");
                    state.page_error = Some(e.to_string());
                    Ok((true, vec![]))
                }
            }
        }
        Event::PreviewSelected(path) => {
            if !is_document(path) {
                tracing::debug!(path = %path, "preview rejected: not a document");
                return Ok((false, vec![]));
            }
            state.selected_preview = Some(path.clone());
            Ok((true, vec![]))
        }
        Event::DeleteRequested(path) => {
            if state.loading {
                return Ok((false, vec![]));
            }
            tracing::debug!(path = %path, "delete requested");
            state.loading = true;
            Ok((true, vec![Action::DeleteAsset { path: path.clone() }]))
        }
        Event::ListingLoaded { generation, snapshot } => {
            if *generation <= state.applied_generation {
                tracing::debug!(
                    generation = generation,
                    applied = state.applied_generation,
                    "discarding stale listing response"
                );
                return Ok((false, vec![]));
            }

            state.store.replace(snapshot.clone());
            state.applied_generation = *generation;
            if *generation == state.fetch_generation {
                state.loading = false;
            }
            tracing::debug!(
                generation = generation,
                images = snapshot.images.len(),
                videos = snapshot.videos.len(),
                files = snapshot.files.len(),
                "listing snapshot installed"
            );
            Ok((true, vec![]))
        }
        Event::FetchFailed { generation, error } => {
            tracing::error!(generation = generation, error = %error, "listing fetch failed");
            if *generation == state.fetch_generation {
                state.loading = false;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::DeleteCompleted { path } => {
            tracing::debug!(path = %path, "delete succeeded, refreshing listing");
            state.fetch_generation += 1;
            Ok((
                true,
                vec![Action::FetchListing {
                    generation: state.fetch_generation,
                }],
            ))
        }
        Event::DeleteFailed { path, error } => {
            tracing::error!(path = %path, error = %error, "delete failed");
            state.loading = false;
            Ok((true, vec![]))
        }
    }
}
