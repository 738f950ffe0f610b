//! The content index engine.
//!
//! Pure functions over caller-supplied entry collections: no owned state,
//! no I/O, no mutation of inputs. Every operation is deterministic given
//! its inputs, so concurrent callers can share one immutable snapshot.
//!
//! The four operations compose into the listing surfaces:
//!
//! ```text
//! posts/projects listing:  published filter → sorted_by_date → paginate
//! tag page:                filter_by_tag_slug → published filter
//! tag cloud:               tag_counts (per kind) → merge_counts → sort_by_count
//! ```

pub mod aggregate;
pub mod lookup;
pub mod page;
pub mod sort;

pub use aggregate::{TagCounts, merge_counts, sort_by_count, tag_counts};
pub use lookup::filter_by_tag_slug;
pub use page::{paginate, total_pages};
pub use sort::sorted_by_date;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

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

    // One dataset through all four operations, the way the listing
    // surfaces compose them.
    #[test]
    fn test_operations_compose() {
        let posts = [
            post("a", "2024-01-01", true, &["Go", "Web"]),
            post("b", "2024-02-01", true, &["Go"]),
            post("c", "2024-03-01", false, &["Web"]),
        ];

        let counts = tag_counts(&posts);
        assert_eq!(counts["Go"], 2);
        assert_eq!(counts["Web"], 1);

        // The unpublished entry is invisible to counts but still sortable;
        // listings drop it explicitly before slicing.
        let published: Vec<Post> = posts.iter().filter(|p| p.published).cloned().collect();
        let sorted = sorted_by_date(&published);
        assert_eq!(sorted[0].date, "2024-02-01");
        assert_eq!(sorted[1].date, "2024-01-01");

        let tagged_go = filter_by_tag_slug(&posts, "go");
        assert_eq!(tagged_go.len(), 2);

        let first_page = paginate(&sorted, Some(1), 1);
        assert_eq!(first_page.len(), 1);
        assert_eq!(first_page[0].date, "2024-02-01");
        assert_eq!(total_pages(sorted.len(), 1), 2);
    }
}
