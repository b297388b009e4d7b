//! Index conversion and span slicing.
//!
//! The annotator numbers sentences and tokens from 1; the document model
//! numbers them from 0. Every position that crosses that boundary goes
//! through [`to_zero_based`], and every lookup goes through [`checked_index`]
//! or [`slice`], so a malformed position can only ever produce "nothing"
//! rather than the wrong token.

/// Convert an annotator position (1-based) to a document index (0-based).
///
/// The result may be negative when the annotator reports position `0`
/// (e.g. a dependency on the virtual root); callers validate it with
/// [`checked_index`]. Saturates at `i64::MIN`.
#[inline]
pub fn to_zero_based(position: i64) -> i64 {
    position.saturating_sub(1)
}

/// Returns `Some(index)` when `index` addresses an element of a sequence of
/// length `len`.
pub fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&idx| idx < len)
}

/// Order a `[start, end)` pair so that `start <= end`.
pub fn normalize_bounds(start: i64, end: i64) -> (i64, i64) {
    if end < start {
        (end, start)
    } else {
        (start, end)
    }
}

/// Borrow the `[start, end)` range of `items`.
///
/// Fails soft: when either bound lies outside `[0, items.len()]` the result
/// is empty. Reversed bounds are swapped before slicing.
pub fn slice<T>(items: &[T], start: i64, end: i64) -> &[T] {
    let bound = |b: i64| usize::try_from(b).ok().filter(|&b| b <= items.len());

    match (bound(start), bound(end)) {
        (Some(start), Some(end)) if end < start => &items[end..start],
        (Some(start), Some(end)) => &items[start..end],
        _ => &[],
    }
}
