//! Tag and title slugification.
//!
//! Tags are compared and addressed by slug, never by raw spelling: two
//! spellings with the same slug are the same tag for lookup purposes.

/// Normalize free text to a URL-safe slug.
///
/// Lowercases, strips diacritics, and collapses runs of anything
/// non-alphanumeric into single hyphens: `"Web Dev"` → `"web-dev"`,
/// `"Café"` → `"cafe"`.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// Rebuild a readable heading from a slug: hyphens become spaces.
///
/// Lossy by design; original casing is gone and stays gone. Capitalization
/// is left to the presentation side.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-').collect::<Vec<_>>().join(" ")
}
