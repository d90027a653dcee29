//! Mediashelf: a client-side gallery state machine for a remote media store.
//!
//! Mediashelf fetches a categorized listing of remote media and document
//! assets, presents it as three tabbed, paginated views sharing one pager,
//! supports delete-then-refresh mutation, and tracks an inline preview target
//! for document files. Rendering, styling, the remote storage service, and
//! the document preview widget are external collaborators: the crate computes
//! what to show, never how to draw it.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host rendering surface (external)                  │  ← reads view models
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling (pure reducer)                    │
//! │  - Action dispatching (async driver)                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Client Layer  │
//! │ (ui/)         │   │ (store/)      │   │ (client/)     │
//! │ - View models │   │ - Snapshot    │   │ - Listing GET │
//! │               │   │   replacement │   │ - Delete      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Categories, snapshots, document classification   │
//! │  - Pure pagination engine                           │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Event Flow
//!
//! 1. The host maps a user gesture (tab click, Next, edit-complete key,
//!    delete button) to an [`Event`] and calls [`Gallery::dispatch`].
//! 2. The pure reducer mutates [`AppState`] and emits [`Action`]s.
//! 3. The driver runs each action against the [`client::ListingClient`] and
//!    feeds the completion back in as another event, to completion.
//! 4. The host re-renders from [`Gallery::viewmodel`] when dispatch reports a
//!    visible change.
//!
//! # Example
//!
//! ```
//! use mediashelf::{Config, Gallery, HttpListingClient};
//!
//! let config = Config::default();
//! let gallery = Gallery::new(&config, HttpListingClient::new(&config));
//! let frame = gallery.viewmodel();
//! assert!(frame.items.is_empty()); // nothing fetched yet
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Gallery};
pub use client::{HttpListingClient, ListingClient};
pub use domain::{Category, ListingSnapshot, MediashelfError, Result};
pub use observability::init_tracing;
pub use ui::GalleryViewModel;

use serde::{Deserialize, Serialize};

/// Deployment configuration for the gallery.
///
/// Supplied explicitly by the host and injected into the client constructor;
/// nothing is read from ambient or global scope. Loadable from a TOML file
/// with every field optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote file store's API (the `/files` endpoints).
    pub api_endpoint: String,

    /// Base URL prepended verbatim to asset reference paths for retrieval.
    pub media_endpoint: String,

    /// Number of assets per page, shared by all three categories. Must be at
    /// least 1.
    pub page_size: u32,

    /// Tracing filter directive for [`init_tracing`]. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: "http://localhost:4000/api".to_string(),
            media_endpoint: "http://localhost:4000/media/".to_string(),
            page_size: 20,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MediashelfError::Config`] on malformed TOML or a zero page
    /// size.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| MediashelfError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MediashelfError::Io`] if the file cannot be read and
    /// [`MediashelfError::Config`] if it cannot be parsed or is invalid.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(MediashelfError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Creates the initial application state for a configured deployment.
///
/// The state starts empty; the host triggers the first fetch by mounting a
/// [`Gallery`] or dispatching [`Event::Refresh`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        api_endpoint = %config.api_endpoint,
        page_size = config.page_size,
        "initializing gallery state"
    );
    AppState::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_parses_partial_toml_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            api_endpoint = "https://shelf.example.com/api"
            page_size = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.api_endpoint, "https://shelf.example.com/api");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.media_endpoint, Config::default().media_endpoint);
    }

    #[test]
    fn config_rejects_zero_page_size() {
        let err = Config::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, MediashelfError::Config(_)));
    }

    #[test]
    fn config_rejects_malformed_toml() {
        assert!(Config::from_toml_str("page_size = ").is_err());
    }

    #[test]
    fn config_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "media_endpoint = \"https://cdn.example.com/\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.media_endpoint, "https://cdn.example.com/");
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn initialize_starts_idle_on_page_one() {
        let state = initialize(&Config::default());
        assert!(!state.loading);
        assert_eq!(state.current_page, 1);
        assert!(state.store.is_empty());
    }
}
