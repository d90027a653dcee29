//! View model types representing renderable gallery state.
//!
//! View models are immutable snapshots computed from application state via
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel).
//! They contain no business logic, only display-ready data: the visible page
//! window with pre-joined media URLs, pager button enablement, and the optional
//! preview target. Rendering reads exclusively from these types.

use crate::domain::Category;

/// Complete gallery view model for rendering one frame.
#[derive(Debug, Clone)]
pub struct GalleryViewModel {
    /// The category currently selected for display.
    pub active_tab: Category,

    /// Assets visible on the current page of the active tab, in server order.
    pub items: Vec<DisplayAsset>,

    /// Pager widget state for the active tab.
    pub pager: PagerInfo,

    /// Inline document preview target, if one is selected.
    pub preview: Option<PreviewInfo>,

    /// Whether a fetch or delete-refresh cycle is in flight (spinner overlay).
    pub loading: bool,

    /// Whether tab, pager, and delete controls accept input.
    ///
    /// `false` exactly while `loading` is `true`; every mutating or navigating
    /// control renders disabled during a cycle.
    pub controls_enabled: bool,

    /// Validation message from a rejected page-input commit, surfaced as a
    /// blocking dialog by the host.
    pub page_error: Option<String>,

    /// Placeholder shown when the active category has nothing to display.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single asset on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAsset {
    /// Opaque reference path, also the delete key.
    pub path: String,

    /// Fully joined media URL, usable verbatim as an image/video/link source.
    pub url: String,

    /// Whether clicking this asset may select it for inline preview.
    pub is_document: bool,
}

/// Pager widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// One-based current page shared by all tabs.
    pub current_page: u32,

    /// Total pages of the active category; zero when it is empty.
    pub total_pages: u32,

    /// Display label, e.g. `"Page 2 of 3"`.
    pub label: String,

    /// Raw page-input buffer as last typed, possibly out of range.
    pub input: String,

    /// Whether the Previous button accepts a click.
    pub prev_enabled: bool,

    /// Whether the Next button accepts a click.
    pub next_enabled: bool,
}

/// Inline preview target for a selected document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewInfo {
    /// Reference path of the selected document.
    pub path: String,

    /// Fully joined URL for the preview frame.
    pub url: String,
}

/// Empty-category placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message, e.g. `"No images to display"`.
    pub message: String,
}
