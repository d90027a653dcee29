//! Domain layer for the mediashelf library.
//!
//! This module contains the core domain types and pure business logic of the
//! gallery, independent of transport or rendering concerns. It keeps the
//! pagination arithmetic and asset classification isolated from the HTTP client
//! and the view-state machinery.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`asset`]: Categories, listing snapshots, and document classification
//! - [`pagination`]: Pure page-window and page-count computation

pub mod asset;
pub mod error;
pub mod pagination;

pub use asset::{is_document, Category, ListingSnapshot};
pub use error::{MediashelfError, Result};
