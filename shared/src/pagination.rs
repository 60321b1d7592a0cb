//! Page slicing and the blog listing state machine.

use crate::{search::filter_articles, Article, CategoryFilter};

/// One page of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Requested 1-based page number, as given.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// `ceil(total_items / page_size)`, zero for an empty sequence.
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `[(page - 1) * size, page * size)` out of `items`, clamped to bounds.
///
/// Out-of-range pages (including page 0) give an empty slice rather than an
/// error; callers clamp with [`clamp_page`] first when they need a real page.
/// A `page_size` of zero is treated as one.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    let slice = if page == 0 {
        &items[..0]
    } else {
        let start = (page - 1).saturating_mul(page_size);
        if start >= items.len() {
            &items[..0]
        } else {
            let end = usize::min(start.saturating_add(page_size), items.len());
            &items[start..end]
        }
    };

    Page {
        items: slice,
        page,
        page_size,
        total_items: items.len(),
        total_pages,
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp to `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page buttons for a pagination strip. Short ranges list every page; long
/// ones keep the first, the last and a window around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

pub fn visible_page_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = clamp_page(current, total);
    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total.saturating_sub(4).max(2), total - 1)
    } else {
        (current - 2, current + 2)
    };

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));
    slots
}

/// Filter and page state behind the blog listing.
///
/// Changing the query or the category always sends the reader back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListing {
    query: String,
    category: CategoryFilter,
    page: usize,
    page_size: usize,
}

/// What the listing shows for a given article set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    pub items: Vec<&'a Article>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl ListingView<'_> {
    /// "Showing 3 of 12 articles"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} articles", self.items.len(), self.total_matches)
    }
}

impl BlogListing {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_filters(&self) -> bool {
        !self.query.is_empty() || self.category != CategoryFilter::All
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if category != self.category {
            self.category = category;
            self.page = 1;
        }
    }

    /// Clicking a tag badge searches for the tag.
    pub fn select_tag(&mut self, tag: &str) {
        self.set_query(tag);
    }

    pub fn clear_filters(&mut self) {
        self.set_query(String::new());
        self.set_category(CategoryFilter::All);
    }

    /// Move to `page`, clamped against the current result set.
    pub fn go_to_page(&mut self, articles: &[Article], page: usize) {
        let matches = filter_articles(articles, &self.query, self.category).len();
        self.page = clamp_page(page, total_pages(matches, self.page_size));
    }

    pub fn next_page(&mut self, articles: &[Article]) {
        self.go_to_page(articles, self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self, articles: &[Article]) {
        self.go_to_page(articles, self.page.saturating_sub(1));
    }

    pub fn view<'a>(&self, articles: &'a [Article]) -> ListingView<'a> {
        let matches = filter_articles(articles, &self.query, self.category);
        let page = paginate(&matches, self.page_size, self.page);
        ListingView {
            items: page.items.to_vec(),
            page: self.page,
            total_pages: page.total_pages,
            total_matches: matches.len(),
        }
    }
}

impl Default for BlogListing {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample_data::sample_articles, Category};

    #[test]
    fn pages_reconstruct_the_sequence() {
        for len in 0..25usize {
            let items = (0..len).collect::<Vec<_>>();
            for size in 1..=10 {
                let first = paginate(&items, size, 1);
                assert_eq!(first.total_pages, len.div_ceil(size));

                let rebuilt = (1..=first.total_pages)
                    .flat_map(|page| paginate(&items, size, page).items.iter().copied())
                    .collect::<Vec<_>>();
                assert_eq!(rebuilt, items, "len={len} size={size}");

                if first.total_pages > 0 {
                    let last = paginate(&items, size, first.total_pages);
                    assert!(!last.is_empty() && last.items.len() <= size);
                }
            }
        }
    }

    #[test]
    fn empty_sequence_has_zero_pages() {
        let items: [u8; 0] = [];
        let page = paginate(&items, 9, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 2, 3).is_empty());
        assert!(paginate(&items, 2, usize::MAX).is_empty());
        assert!(paginate(&items, 2, 0).is_empty());
        assert_eq!(paginate(&items, 0, 2).items, &[2]);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(
            visible_page_slots(2, 3),
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]
        );
        assert!(visible_page_slots(1, 0).is_empty());
    }

    #[test]
    fn long_ranges_elide_the_middle() {
        assert_eq!(
            visible_page_slots(10, 20),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis("left"),
                PageSlot::Page(8),
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Page(12),
                PageSlot::Ellipsis("right"),
                PageSlot::Page(20),
            ]
        );
        assert_eq!(visible_page_slots(1, 20)[1..5], [
            PageSlot::Page(2),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5)
        ]);
        assert_eq!(visible_page_slots(20, 20)[2], PageSlot::Page(16));
    }

    #[test]
    fn changing_criteria_resets_page() {
        let articles = sample_articles();
        let mut listing = BlogListing::new(1);
        listing.go_to_page(&articles, 3);
        assert_eq!(listing.page(), 3);

        listing.set_query("design");
        assert_eq!(listing.page(), 1);

        listing.go_to_page(&articles, 2);
        listing.set_query("design");
        assert_eq!(listing.page(), 2, "same query keeps the page");

        listing.set_category(Category::Design.into());
        assert_eq!(listing.page(), 1);

        listing.go_to_page(&articles, 9);
        assert_eq!(listing.page(), 2, "clamped to the last design page");

        listing.clear_filters();
        assert!(!listing.has_filters());
        assert_eq!(listing.page(), 1);
    }

    #[test]
    fn view_reports_counts() {
        let articles = sample_articles();
        let mut listing = BlogListing::new(4);
        listing.next_page(&articles);
        let view = listing.view(&articles);
        assert_eq!(view.page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.summary(), "Showing 2 of 6 articles");

        listing.previous_page(&articles);
        listing.previous_page(&articles);
        assert_eq!(listing.page(), 1);
    }

    #[test]
    fn technology_listing_over_sample_store() {
        let store = crate::ContentStore::sample();
        assert_eq!(store.articles().iter().filter(|a| a.featured).count(), 1);

        let listing = BlogListing::new(9).with_category(Category::Technology.into());
        let view = listing.view(store.articles());
        let ids = view.items.iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "5"]);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.total_matches, 2);
    }

    #[test]
    fn tag_selection_searches_by_tag() {
        let articles = sample_articles();
        let mut listing = BlogListing::default().with_category(CategoryFilter::All);
        listing.select_tag("Remote Work");
        let view = listing.view(&articles);
        assert_eq!(view.total_matches, 1);
        assert_eq!(view.items[0].id, "3");
    }
}
