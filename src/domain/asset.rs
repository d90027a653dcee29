//! Asset domain model: categories, listing snapshots, and document classification.
//!
//! An asset reference is an opaque path string naming an object on the remote
//! media store. References carry no intrinsic structure beyond their string form
//! and the suffix used to classify preview-ability; they are immutable once
//! produced by a fetch.

use serde::{Deserialize, Serialize};

/// File suffixes that classify an asset reference as a previewable document.
const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf"];

/// The three fixed asset classes served by the remote store.
///
/// Each category owns an ordered sequence of asset references within a
/// [`ListingSnapshot`]; the server-provided order is always preserved. The set
/// is closed: the wire format has exactly these three keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Image assets, rendered as an image grid.
    Images,
    /// Video assets, rendered with playback controls.
    Videos,
    /// Everything else, rendered as a link list with optional document preview.
    Files,
}

impl Category {
    /// All categories in tab-bar order.
    pub const ALL: [Self; 3] = [Self::Images, Self::Videos, Self::Files];

    /// Human-readable tab label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Images => "Images",
            Self::Videos => "Videos",
            Self::Files => "Files",
        }
    }
}

/// The complete three-category result of one listing fetch.
///
/// A snapshot is installed wholesale and never merged: a fetch either replaces
/// the previous snapshot entirely or leaves it untouched. This mirrors the
/// remote store's contract of returning all three sequences in one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    /// Image asset references, in server order.
    pub images: Vec<String>,
    /// Video asset references, in server order.
    pub videos: Vec<String>,
    /// Other file references, in server order.
    pub files: Vec<String>,
}

impl ListingSnapshot {
    /// Returns the ordered reference sequence for one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Images => &self.images,
            Category::Videos => &self.videos,
            Category::Files => &self.files,
        }
    }

    /// Returns the number of references in one category.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Returns `true` if every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty() && self.files.is_empty()
    }
}

/// Returns `true` if the reference names a previewable document.
///
/// Classification is purely suffix-based and case-insensitive; only document
/// files may be selected for inline preview.
#[must_use]
pub fn is_document(path: &str) -> bool {
    let lowered = path.to_ascii_lowercase();
    DOCUMENT_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_classification_is_suffix_based() {
        assert!(is_document("reports/annual.pdf"));
        assert!(is_document("SCAN.PDF"));
        assert!(!is_document("photo.jpg"));
        assert!(!is_document("pdf"));
        assert!(!is_document("archive.pdf.zip"));
    }

    #[test]
    fn snapshot_accessors_preserve_order() {
        let snapshot = ListingSnapshot {
            images: vec!["b.png".into(), "a.png".into()],
            videos: vec!["clip.mp4".into()],
            files: vec![],
        };
        assert_eq!(snapshot.get(Category::Images), ["b.png", "a.png"]);
        assert_eq!(snapshot.len(Category::Videos), 1);
        assert_eq!(snapshot.len(Category::Files), 0);
        assert!(!snapshot.is_empty());
        assert!(ListingSnapshot::default().is_empty());
    }
}
