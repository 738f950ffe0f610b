//! Fixed-size page windows over sorted sequences.

/// Slice out the 1-based `page` of `per_page` items.
///
/// Missing or zero page numbers select the first page; a page past the end
/// is empty rather than an error. The window is
/// `[(page - 1) * per_page, page * per_page)`.
pub fn paginate<T: Clone>(items: &[T], page: Option<u64>, per_page: usize) -> Vec<T> {
    let page = page.unwrap_or(1).max(1);
    let start = (page - 1).saturating_mul(per_page as u64);
    if start >= items.len() as u64 {
        return Vec::new();
    }

    let start = start as usize;
    let end = start.saturating_add(per_page).min(items.len());
    items[start..end].to_vec()
}

/// Number of pages needed for `total` items: `ceil(total / per_page)`.
///
/// Zero items need zero pages, and a zero page size yields zero pages
/// rather than dividing by it.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
