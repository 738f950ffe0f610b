//! Chronological ordering of content entries.

use crate::content::ContentEntry;

/// Return the entries ordered by publish date, newest first.
///
/// The input is left untouched; callers keep their own ordering. Dates are
/// ISO 8601 strings, so lexicographic comparison is chronological and no
/// parsing happens here (load-time validation guarantees the format).
/// Equal dates keep their input order via the stable sort, but tie order
/// is not part of the contract.
pub fn sorted_by_date<E: ContentEntry + Clone>(entries: &[E]) -> Vec<E> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn post(slug: &str, date: &str) -> Post {
        Post {
            slug: slug.into(),
            title: slug.to_uppercase(),
            description: None,
            date: date.into(),
            published: true,
            tags: vec![],
        }
    }

    #[test]
    fn test_newest_first() {
        let posts = [
            post("a", "2024-01-01"),
            post("b", "2024-02-01"),
            post("c", "2023-12-31"),
        ];
        let sorted = sorted_by_date(&posts);

        let slugs: Vec<&str> = sorted.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a", "c"]);
    }

    #[test]
    fn test_result_is_a_permutation() {
        let posts = [
            post("a", "2024-01-01"),
            post("b", "2024-02-01"),
            post("c", "2024-03-01"),
            post("d", "2024-02-15"),
        ];
        let sorted = sorted_by_date(&posts);

        assert_eq!(sorted.len(), posts.len());
        for original in &posts {
            assert!(sorted.iter().any(|p| p.slug == original.slug));
        }
        for pair in sorted.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_input_left_untouched() {
        let posts = [post("a", "2024-01-01"), post("b", "2024-02-01")];
        let _ = sorted_by_date(&posts);

        assert_eq!(posts[0].slug, "a");
        assert_eq!(posts[1].slug, "b");
    }

    #[test]
    fn test_datetime_sorts_after_midnight_date() {
        // "2024-01-01T09:00:00Z" > "2024-01-01" lexicographically,
        // so a timestamped entry sorts before the bare date of the same day.
        let posts = [post("plain", "2024-01-01"), post("stamped", "2024-01-01T09:00:00Z")];
        let sorted = sorted_by_date(&posts);

        assert_eq!(sorted[0].slug, "stamped");
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let posts = [post("first", "2024-01-01"), post("second", "2024-01-01")];
        let sorted = sorted_by_date(&posts);

        assert_eq!(sorted[0].slug, "first");
        assert_eq!(sorted[1].slug, "second");
    }

    #[test]
    fn test_empty() {
        let sorted = sorted_by_date::<Post>(&[]);
        assert!(sorted.is_empty());
    }
}
