//! Render-facing layer: immutable view models.
//!
//! Markup, styling, and the document preview widget are external
//! collaborators; this crate only computes what they should show. The view
//! model is the sole contract between the state machine and any rendering
//! surface.

pub mod viewmodel;

pub use viewmodel::{DisplayAsset, EmptyState, GalleryViewModel, PagerInfo, PreviewInfo};
