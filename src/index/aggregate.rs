//! Tag frequency aggregation across entry collections.

use crate::content::ContentEntry;
use std::collections::BTreeMap;

/// Tag → occurrence count among published entries, keyed by the raw tag
/// string.
///
/// Raw spellings that normalize to the same slug stay separate keys here:
/// counting and lookup merge them through the slug, but which spelling a
/// caller displays is its own concern. The `BTreeMap` keeps enumeration
/// order deterministic.
pub type TagCounts = BTreeMap<String, usize>;

/// Count tag occurrences among published entries of one collection.
///
/// Unpublished entries contribute nothing. A duplicate tag within a single
/// entry counts each time it appears; deduplicating here would hide bad
/// input upstream.
pub fn tag_counts<E: ContentEntry>(entries: &[E]) -> TagCounts {
    let mut counts = TagCounts::new();
    for entry in entries.iter().filter(|e| e.published()) {
        for tag in entry.tags() {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Combine per-collection counts additively.
///
/// Keys are matched by string equality, so the combined map equals the sum
/// of the inputs regardless of the order they are merged in.
pub fn merge_counts<I>(maps: I) -> TagCounts
where
    I: IntoIterator<Item = TagCounts>,
{
    let mut combined = TagCounts::new();
    for map in maps {
        for (tag, count) in map {
            *combined.entry(tag).or_insert(0) += count;
        }
    }
    combined
}

/// Tag names ordered by count descending, then alphabetically.
///
/// The alphabetical tie-break is a deliberate choice so the cloud renders
/// identically across runs.
pub fn sort_by_count(counts: &TagCounts) -> Vec<&str> {
    let mut tags: Vec<&str> = counts.keys().map(String::as_str).collect();
    tags.sort_by(|a, b| counts[*b].cmp(&counts[*a]).then_with(|| a.cmp(b)));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Post, Project};

    fn post(slug: &str, date: &str, published: bool, tags: &[&str]) -> Post {
        Post {
            slug: slug.into(),
            title: slug.to_uppercase(),
            description: None,
            date: date.into(),
            published,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn project(slug: &str, published: bool, tags: &[&str]) -> Project {
        Project {
            slug: slug.into(),
            title: slug.to_uppercase(),
            description: None,
            date: "2024-01-01".into(),
            published,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            github_link: None,
            demo_link: None,
        }
    }

    #[test]
    fn test_counts_published_only() {
        let posts = [
            post("a", "2024-01-01", true, &["Go", "Web"]),
            post("b", "2024-02-01", true, &["Go"]),
            post("c", "2024-03-01", false, &["Web"]),
        ];
        let counts = tag_counts(&posts);

        assert_eq!(counts["Go"], 2);
        assert_eq!(counts["Web"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_sum_equals_entry_tag_pairs() {
        let posts = [
            post("a", "2024-01-01", true, &["Go", "Web", "CLI"]),
            post("b", "2024-02-01", true, &["Go"]),
            post("c", "2024-03-01", true, &[]),
            post("d", "2024-04-01", false, &["Go", "Web"]),
        ];
        let counts = tag_counts(&posts);

        // 3 + 1 pairs from published entries; the unpublished entry adds none
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_removing_unpublished_changes_nothing() {
        let with = [
            post("a", "2024-01-01", true, &["Go"]),
            post("b", "2024-02-01", false, &["Go", "Web"]),
        ];
        let without = [post("a", "2024-01-01", true, &["Go"])];

        assert_eq!(tag_counts(&with), tag_counts(&without));
    }

    #[test]
    fn test_duplicate_tag_within_entry_counts_twice() {
        let posts = [post("a", "2024-01-01", true, &["go", "go"])];
        let counts = tag_counts(&posts);

        assert_eq!(counts["go"], 2);
    }

    #[test]
    fn test_raw_spellings_stay_separate() {
        // "Go" and "go" share a slug but are distinct count keys
        let posts = [
            post("a", "2024-01-01", true, &["Go"]),
            post("b", "2024-02-01", true, &["go"]),
        ];
        let counts = tag_counts(&posts);

        assert_eq!(counts["Go"], 1);
        assert_eq!(counts["go"], 1);
    }

    #[test]
    fn test_merge_is_additive_across_kinds() {
        let posts = [post("a", "2024-01-01", true, &["Go", "Web"])];
        let projects = [project("p", true, &["Go", "Rust"])];

        let combined = merge_counts([tag_counts(&posts), tag_counts(&projects)]);

        assert_eq!(combined["Go"], 2);
        assert_eq!(combined["Web"], 1);
        assert_eq!(combined["Rust"], 1);
    }

    #[test]
    fn test_merge_is_commutative() {
        let posts = [
            post("a", "2024-01-01", true, &["Go", "Web"]),
            post("b", "2024-02-01", true, &["Go"]),
        ];
        let projects = [project("p", true, &["Web", "Rust"])];

        let forward = merge_counts([tag_counts(&posts), tag_counts(&projects)]);
        let backward = merge_counts([tag_counts(&projects), tag_counts(&posts)]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_sort_by_count_desc_then_alpha() {
        let counts = TagCounts::from([
            ("Web".to_owned(), 2),
            ("Go".to_owned(), 5),
            ("CLI".to_owned(), 2),
            ("Rust".to_owned(), 1),
        ]);

        assert_eq!(sort_by_count(&counts), ["Go", "CLI", "Web", "Rust"]);
    }

    #[test]
    fn test_empty_collection_has_no_tags() {
        assert!(tag_counts::<Post>(&[]).is_empty());
        assert!(sort_by_count(&TagCounts::new()).is_empty());
    }
}
