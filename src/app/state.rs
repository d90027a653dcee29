//! Application state container and view model computation.
//!
//! [`AppState`] is the single source of truth for the gallery view: the last
//! installed listing snapshot, the shared pagination pair, tab selection, the
//! raw page-input buffer, the preview target, and the loading flag. It is
//! mutated only by the event handler and read back through
//! [`compute_viewmodel`](AppState::compute_viewmodel).
//!
//! One `current_page`/`page_size` pair is shared by all three categories even
//! though their lengths differ; a page valid on one tab may be past the end of
//! another, which renders as an empty window rather than being clamped. This
//! carries the source behavior deliberately.

use crate::domain::pagination::{has_next_page, is_valid_page, page_window, total_pages};
use crate::domain::{Category, MediashelfError, Result};
use crate::store::ListingStore;
use crate::ui::viewmodel::{DisplayAsset, EmptyState, GalleryViewModel, PagerInfo, PreviewInfo};
use crate::Config;

/// Central application state for the gallery view.
///
/// Pagination and selection state persist across fetches: replacing the
/// snapshot after a refresh or delete never resets `current_page`, the input
/// buffer, or the preview target.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Category store holding the last successful listing snapshot.
    pub store: ListingStore,

    /// The category currently selected for display and pagination.
    pub active_tab: Category,

    /// One-based current page, shared across all three categories.
    ///
    /// Invariant: `current_page >= 1`. No upper bound is enforced here; the
    /// handler validates page-input commits against the active category's
    /// total pages before accepting a change.
    pub current_page: u32,

    /// Fixed page size, shared across all three categories.
    pub page_size: u32,

    /// Raw page-input buffer as typed by the user.
    ///
    /// May transiently be out of range or non-numeric; validated only on an
    /// explicit commit.
    pub page_input: String,

    /// Reference of the document selected for inline preview, if any.
    ///
    /// Persists until a different document is selected; deleting the
    /// previewed file does not clear it.
    pub selected_preview: Option<String>,

    /// Whether a fetch or delete-refresh cycle is in flight.
    ///
    /// While set, all navigation, tab, and delete entry points reject input.
    pub loading: bool,

    /// Validation message from the last rejected page-input commit.
    pub page_error: Option<String>,

    /// Generation of the most recently started fetch.
    ///
    /// Incremented whenever a fetch is requested. A completion carrying an
    /// older generation than the last applied snapshot is discarded, so a
    /// superseded response can never overwrite a newer listing.
    pub fetch_generation: u64,

    /// Generation of the last snapshot actually installed in the store.
    pub applied_generation: u64,

    /// Base media endpoint prepended verbatim to asset reference paths.
    media_endpoint: String,
}

impl AppState {
    /// Creates the initial state for a configured deployment.
    ///
    /// Starts on the Images tab at page 1 with an empty store; the first
    /// snapshot arrives with the mount-triggered fetch.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            store: ListingStore::new(),
            active_tab: Category::Images,
            current_page: 1,
            page_size: config.page_size,
            page_input: "1".to_string(),
            selected_preview: None,
            loading: false,
            page_error: None,
            fetch_generation: 0,
            applied_generation: 0,
            media_endpoint: config.media_endpoint.clone(),
        }
    }

    /// Returns the ordered references of the active category.
    #[must_use]
    pub fn active_assets(&self) -> &[String] {
        self.store.get(self.active_tab)
    }

    /// Returns the total page count of the active category.
    #[must_use]
    pub fn active_total_pages(&self) -> u32 {
        total_pages(self.active_assets().len(), self.page_size)
    }

    /// Validates the page-input buffer and navigates on success.
    ///
    /// Accepts only a numeric value within `[1, total_pages]` of the active
    /// category (page 1 is always acceptable when the category is empty). On
    /// success the current page moves and any prior validation message clears.
    ///
    /// # Errors
    ///
    /// Returns [`MediashelfError::Validation`] on a non-numeric buffer or an
    /// out-of-range page; `current_page` stays untouched in both cases.
    pub fn commit_page_input(&mut self) -> Result<()> {
        let total = self.active_total_pages();

        let page: u32 = self.page_input.trim().parse().map_err(|_| {
            MediashelfError::Validation(format!(
                "{:?} is not a page number",
                self.page_input
            ))
        })?;

        if !is_valid_page(page, total) {
            return Err(MediashelfError::Validation(format!(
                "page {page} is out of range 1-{total}"
            )));
        }

        self.current_page = page;
        self.page_error = None;
        Ok(())
    }

    /// Joins the configured media endpoint with an asset reference path.
    ///
    /// Plain concatenation, matching how the remote store addresses assets.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.media_endpoint, path)
    }

    /// Computes the render-ready view model for the current state.
    ///
    /// Windows the active category through the pagination engine, pre-joins
    /// media URLs, and derives pager button enablement from the same guards
    /// the event handler applies.
    #[must_use]
    pub fn compute_viewmodel(&self) -> GalleryViewModel {
        let assets = self.active_assets();
        let total = total_pages(assets.len(), self.page_size);

        let items: Vec<DisplayAsset> = page_window(assets, self.current_page, self.page_size)
            .iter()
            .map(|path| DisplayAsset {
                path: path.clone(),
                url: self.asset_url(path),
                is_document: crate::domain::is_document(path),
            })
            .collect();

        let empty_state = if assets.is_empty() {
            Some(EmptyState {
                message: format!(
                    "No {} to display",
                    self.active_tab.label().to_lowercase()
                ),
            })
        } else {
            None
        };

        let preview = self.selected_preview.as_ref().map(|path| PreviewInfo {
            path: path.clone(),
            url: self.asset_url(path),
        });

        GalleryViewModel {
            active_tab: self.active_tab,
            items,
            pager: PagerInfo {
                current_page: self.current_page,
                total_pages: total,
                label: format!("Page {} of {}", self.current_page, total),
                input: self.page_input.clone(),
                prev_enabled: !self.loading && self.current_page > 1,
                next_enabled: !self.loading
                    && has_next_page(assets.len(), self.current_page, self.page_size),
            },
            preview,
            loading: self.loading,
            controls_enabled: !self.loading,
            page_error: self.page_error.clone(),
            empty_state,
        }
    }
}
