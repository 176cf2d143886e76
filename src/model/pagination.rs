/// The fixed number of repositories shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Client-side pagination state over an ordered sequence of items.
///
/// Pages are 1-based. An empty sequence renders as one page of zero
/// items, so `current_page` is always within
/// `1..=max(1, ceil(total_items / page_size))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// The 1-based index of the displayed page.
    current_page: usize,

    /// The fixed number of items per page.
    page_size: usize,
}

impl PageState {
    /// Creates a new `PageState` starting at the first page.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");

        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Retrieves the 1-based index of the displayed page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Retrieves the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Computes the total number of pages for `total_items` items.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    /// Advances to the next page if one exists; a no-op on the last page.
    pub fn next(&mut self, total_items: usize) {
        if self.current_page < self.total_pages(total_items) {
            self.current_page += 1;
        }
    }

    /// Moves back to the previous page if one exists; a no-op on the first page.
    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Clamps the current page to the last valid page for `total_items` items.
    ///
    /// Called whenever the underlying sequence shrinks, so the
    /// displayed page is always valid for the current filtered set.
    pub fn clamp(&mut self, total_items: usize) {
        self.current_page = self.current_page.min(self.total_pages(total_items));
    }

    /// Retrieves the slice of `items` belonging to the current page.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());

        if start >= items.len() {
            &[]
        } else {
            &items[start..end]
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = PageState::new(6);

        assert_eq!(1, page.total_pages(1));
        assert_eq!(1, page.total_pages(6));
        assert_eq!(2, page.total_pages(7));
        assert_eq!(2, page.total_pages(12));
        assert_eq!(3, page.total_pages(13));
    }

    #[test]
    fn empty_sequence_counts_as_one_page() {
        let page = PageState::new(6);

        assert_eq!(1, page.total_pages(0));
        assert_eq!(0, page.page_slice::<u32>(&[]).len());
    }

    #[test]
    fn next_advances_until_last_page_then_is_a_no_op() {
        let mut page = PageState::new(6);

        page.next(8);
        assert_eq!(2, page.current_page());

        page.next(8);
        assert_eq!(2, page.current_page());
    }

    #[test]
    fn previous_moves_back_until_first_page_then_is_a_no_op() {
        let mut page = PageState::new(6);
        page.next(8);

        page.previous();
        assert_eq!(1, page.current_page());

        page.previous();
        assert_eq!(1, page.current_page());
    }

    #[test]
    fn page_slices_partition_the_sequence() {
        let items = (0..13).collect::<Vec<_>>();
        let mut page = PageState::new(6);

        let mut total_sliced = 0;
        for _ in 0..page.total_pages(items.len()) {
            total_sliced += page.page_slice(&items).len();
            page.next(items.len());
        }

        assert_eq!(items.len(), total_sliced);
    }

    #[test]
    fn page_slice_returns_the_half_open_range() {
        let items = (0..8).collect::<Vec<_>>();
        let mut page = PageState::new(6);

        assert_eq!(&[0, 1, 2, 3, 4, 5], page.page_slice(&items));

        page.next(items.len());
        assert_eq!(&[6, 7], page.page_slice(&items));
    }

    #[test]
    fn clamp_moves_an_out_of_range_page_to_the_last_valid_page() {
        let mut page = PageState::new(6);
        page.next(13);
        page.next(13);
        assert_eq!(3, page.current_page());

        page.clamp(7);

        assert_eq!(2, page.current_page());
    }

    #[test]
    fn clamp_leaves_a_valid_page_untouched() {
        let mut page = PageState::new(6);
        page.next(13);

        page.clamp(13);

        assert_eq!(2, page.current_page());
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn zero_page_size_is_rejected() {
        PageState::new(0);
    }
}
