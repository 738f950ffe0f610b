//! Tag-slug filtering.

use crate::content::ContentEntry;
use crate::utils::slug::slugify;

/// Entries carrying at least one tag that normalizes to `slug`.
///
/// Matching is OR-within-entry: an entry tagged `["Go", "Web"]` is returned
/// for both `go` and `web`. Entries without tags never match, and a slug
/// with no matches yields an empty vec, not an error. Input order is
/// preserved; callers sort when they need chronology.
pub fn filter_by_tag_slug<E: ContentEntry + Clone>(entries: &[E], slug: &str) -> Vec<E> {
    entries
        .iter()
        .filter(|entry| entry.tags().iter().any(|tag| slugify(tag) == slug))
        .cloned()
        .collect()
}
