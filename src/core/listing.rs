//! Client-side list shaping: active filter, newest-first ordering, top-N
//! cut-offs and pagination over an in-memory array.

use crate::entities::Resource;

/// Keeps only records whose status flag is active.
#[must_use]
pub fn active<E: Resource>(items: Vec<E>) -> Vec<E> {
    items.into_iter().filter(Resource::is_active).collect()
}

/// Sorts newest first.
///
/// When every record carries a creation time the order is by time, ties
/// broken by id; as soon as one record lacks it the whole list is ordered by
/// id instead. Both are strict descending orders.
pub fn sort_newest<E: Resource>(items: &mut [E]) {
    if items.iter().all(|e| e.created_at().is_some()) {
        items.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
    } else {
        items.sort_by_key(|e| std::cmp::Reverse(e.id()));
    }
}

/// Active records, newest first, at most `limit` of them.
#[must_use]
pub fn newest_active<E: Resource>(items: Vec<E>, limit: usize) -> Vec<E> {
    let mut items = active(items);
    sort_newest(&mut items);
    items.truncate(limit);
    items
}

/// One entry of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number
    Page(u32),
    /// An ellipsis
    Gap,
}

/// Page bookkeeping shared by the catalog and post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total: u64,
}

impl Pagination {
    /// Starts at page 1.
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / page_size)`.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        u32::try_from(self.total.div_ceil(u64::from(self.page_size))).unwrap_or(u32::MAX)
    }

    /// Records a new total. The current page is left alone.
    pub const fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Sets the page without range checking, e.g. from the URL before the
    /// total is known. Zero becomes 1.
    pub fn reset_to(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Moves to `page` if it lies within `[1, total_pages]`; otherwise nothing
    /// changes. Returns whether the page moved.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// The slice of `items` shown on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.page_size as usize;
        let start = (self.page.saturating_sub(1) as usize).saturating_mul(size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }

    /// First and last page, the current page and its neighbours, with a gap
    /// marker two pages away from the current one.
    #[must_use]
    pub fn window(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        let current = i64::from(self.page);
        (1..=total)
            .filter_map(|n| {
                let i = i64::from(n);
                if n == 1 || n == total || (current - 1..=current + 1).contains(&i) {
                    Some(PageItem::Page(n))
                } else if i == current - 2 || i == current + 2 {
                    Some(PageItem::Gap)
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Post;
    use serde_json::json;

    fn posts(value: serde_json::Value) -> Vec<Post> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_total_pages_and_clamping() {
        let mut pagination = Pagination::new(12);
        pagination.set_total(25);
        assert_eq!(pagination.total(), 25);
        assert_eq!(pagination.total_pages(), 3);

        assert!(!pagination.go_to(0));
        assert_eq!(pagination.page(), 1);
        assert!(!pagination.go_to(4));
        assert_eq!(pagination.page(), 1);
        assert!(pagination.go_to(3));
        assert_eq!(pagination.page(), 3);
    }

    #[test]
    fn test_slice_last_page() {
        let items: Vec<u32> = (1..=25).collect();
        let mut pagination = Pagination::new(12);
        pagination.set_total(25);
        pagination.go_to(3);
        assert_eq!(pagination.slice(&items), &[25]);
        pagination.reset_to(9);
        assert!(pagination.slice(&items).is_empty());
    }

    #[test]
    fn test_window() {
        let mut pagination = Pagination::new(1);
        pagination.set_total(10);
        pagination.reset_to(5);
        assert_eq!(
            pagination.window(),
            vec![
                PageItem::Page(1),
                PageItem::Gap,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Gap,
                PageItem::Page(10),
            ]
        );

        pagination.reset_to(1);
        assert_eq!(
            pagination.window(),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Gap, PageItem::Page(10)]
        );
    }

    #[test]
    fn test_active_filter_accepts_both_encodings() {
        let items = posts(json!([
            {"id": 1, "status": true}, {"id": 2, "status": 1},
            {"id": 3, "status": false}, {"id": 4, "status": 0}, {"id": 5}
        ]));
        let ids: Vec<i64> = active(items).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_newest_by_timestamp_then_by_id() {
        let mut dated = posts(json!([
            {"id": 1, "created_at": "2024-01-02T00:00:00"},
            {"id": 2, "created_at": "2024-03-01T00:00:00"},
            {"id": 3, "created_at": "2023-12-31T00:00:00"}
        ]));
        sort_newest(&mut dated);
        assert_eq!(dated.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1, 3]);

        let mut mixed = posts(json!([
            {"id": 1, "created_at": "2030-01-01T00:00:00"}, {"id": 3}, {"id": 2}
        ]));
        sort_newest(&mut mixed);
        assert_eq!(mixed.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_newest_active_cutoff() {
        let items = posts(json!([
            {"id": 1, "status": 1}, {"id": 2, "status": 1},
            {"id": 3, "status": 0}, {"id": 4, "status": 1}
        ]));
        let ids: Vec<i64> = newest_active(items, 2).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2]);
    }
}
