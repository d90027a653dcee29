//! Pure pagination engine shared across the three categories.
//!
//! Given a sequence and a page size, these functions compute the visible
//! window, the total page count, and valid navigation bounds. All functions are
//! deterministic, stateless, and side-effect-free; the view-state controller
//! decides what to do with out-of-range pages, the engine never clamps on its
//! own.
//!
//! Pages are one-based throughout: page `k` covers the zero-based offsets
//! `(k - 1) * page_size .. k * page_size`, clipped to the sequence bounds.

/// Returns the total number of pages for a sequence of `len` elements.
///
/// Computed as `ceil(len / page_size)`; an empty sequence has zero pages.
///
/// # Examples
///
/// ```
/// use mediashelf::domain::pagination::total_pages;
///
/// assert_eq!(total_pages(0, 20), 0);
/// assert_eq!(total_pages(20, 20), 1);
/// assert_eq!(total_pages(21, 20), 2);
/// ```
#[must_use]
pub fn total_pages(len: usize, page_size: u32) -> u32 {
    debug_assert!(page_size > 0, "page size must be positive");
    let len = len as u64;
    let size = u64::from(page_size);
    ((len + size - 1) / size) as u32
}

/// Returns the contiguous sub-sequence visible on `current_page`.
///
/// If `current_page` exceeds the sequence's total pages (or is zero, which no
/// caller should produce), the window is empty rather than clamped.
#[must_use]
pub fn page_window<T>(seq: &[T], current_page: u32, page_size: u32) -> &[T] {
    debug_assert!(page_size > 0, "page size must be positive");
    if current_page == 0 {
        return &[];
    }
    let start = (current_page as usize - 1).saturating_mul(page_size as usize);
    if start >= seq.len() {
        return &[];
    }
    let end = start.saturating_add(page_size as usize).min(seq.len());
    &seq[start..end]
}

/// Returns `true` if `page` is an acceptable target for navigation.
///
/// Page numbers start at 1. The empty-sequence edge case (`total_pages == 0`)
/// still permits page 1, so an empty category keeps a well-defined resting
/// page.
#[must_use]
pub fn is_valid_page(page: u32, total_pages: u32) -> bool {
    page >= 1 && (total_pages == 0 || page <= total_pages)
}

/// Returns `true` if a page beyond `current_page` exists.
///
/// This is the Next-button guard: `current_page * page_size < len`. The view
/// model and the reducer share this single definition so the rendered button
/// state can never disagree with what the reducer accepts.
#[must_use]
pub fn has_next_page(len: usize, current_page: u32, page_size: u32) -> bool {
    u64::from(current_page) * u64::from(page_size) < len as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("asset-{i}.png")).collect()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(19, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(25, 20), 2);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(7, 1), 7);
    }

    #[test]
    fn windows_are_full_except_the_last_page() {
        let seq = items(25);
        for page in 1..=total_pages(seq.len(), 20) {
            let window = page_window(&seq, page, 20);
            if page < total_pages(seq.len(), 20) {
                assert_eq!(window.len(), 20);
            } else {
                assert_eq!(window.len(), seq.len() - (page as usize - 1) * 20);
            }
        }
    }

    #[test]
    fn window_contents_match_offsets() {
        let seq = items(25);
        let first = page_window(&seq, 1, 20);
        assert_eq!(first, &seq[0..20]);
        let second = page_window(&seq, 2, 20);
        assert_eq!(second, &seq[20..25]);
        assert_eq!(second.len(), 5);
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let seq = items(25);
        assert!(page_window(&seq, 3, 20).is_empty());
        assert!(page_window(&seq, 100, 20).is_empty());
        assert!(page_window::<String>(&[], 1, 20).is_empty());
        assert!(page_window(&seq, 0, 20).is_empty());
    }

    #[test]
    fn page_validity_bounds() {
        assert!(!is_valid_page(0, 5));
        assert!(!is_valid_page(0, 0));
        assert!(is_valid_page(1, 0));
        assert!(is_valid_page(1, 1));
        assert!(is_valid_page(5, 5));
        assert!(!is_valid_page(6, 5));
    }

    #[test]
    fn next_page_guard_matches_source_behavior() {
        // 20 items at page size 20: exactly one page, Next disabled.
        assert!(!has_next_page(20, 1, 20));
        // 25 items: Next enabled on page 1, disabled on page 2.
        assert!(has_next_page(25, 1, 20));
        assert!(!has_next_page(25, 2, 20));
        assert!(!has_next_page(0, 1, 20));
    }
}
