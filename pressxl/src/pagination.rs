/// Paging metadata for the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total_count: u64) -> Self {
        Self {
            page,
            per_page,
            total_count,
        }
    }

    pub fn pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.per_page)) as u32
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    /// Page numbers to render with the default window of two pages at each
    /// edge and around the current page.
    pub fn iter_pages(&self) -> PageIter {
        self.iter_pages_with(2, 2, 2, 2)
    }

    /// `None` items stand for a run of skipped pages.
    pub fn iter_pages_with(
        &self,
        left_edge: u32,
        left_current: u32,
        right_current: u32,
        right_edge: u32,
    ) -> PageIter {
        PageIter {
            page: self.page,
            pages: self.pages(),
            left_edge,
            left_current,
            right_current,
            right_edge,
            next: 1,
            last: 0,
            pending: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageIter {
    page: u32,
    pages: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
    next: u32,
    last: u32,
    pending: Option<u32>,
}

impl PageIter {
    fn shown(&self, num: u32) -> bool {
        let (num, page) = (i64::from(num), i64::from(self.page));
        num <= i64::from(self.left_edge)
            || (num > page - i64::from(self.left_current) - 1
                && num < page + i64::from(self.right_current))
            || num > i64::from(self.pages) - i64::from(self.right_edge)
    }
}

impl Iterator for PageIter {
    type Item = Option<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(num) = self.pending.take() {
            self.last = num;
            return Some(Some(num));
        }

        while self.next <= self.pages {
            let num = self.next;
            self.next += 1;
            if !self.shown(num) {
                continue;
            }
            if self.last + 1 != num {
                self.pending = Some(num);
                return Some(None);
            }
            self.last = num;
            return Some(Some(num));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_round_up() {
        assert_eq!(Pagination::new(1, 10, 0).pages(), 0);
        assert_eq!(Pagination::new(1, 10, 1).pages(), 1);
        assert_eq!(Pagination::new(1, 10, 10).pages(), 1);
        assert_eq!(Pagination::new(1, 10, 11).pages(), 2);
        assert_eq!(Pagination::new(1, 10, 25).pages(), 3);
        assert_eq!(Pagination::new(1, 7, 700).pages(), 100);
    }

    #[test]
    fn page_count_matches_ceiling_for_many_sizes() {
        for per_page in 1..=12u32 {
            for total in 0..=60u64 {
                let expected = (total + u64::from(per_page) - 1) / u64::from(per_page);
                assert_eq!(
                    Pagination::new(1, per_page, total).pages() as u64,
                    expected
                );
            }
        }
    }

    #[test]
    fn prev_and_next_flags() {
        let middle = Pagination::new(2, 10, 25);
        assert_eq!(middle.pages(), 3);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let first = Pagination::new(1, 10, 25);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination::new(3, 10, 25);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let empty = Pagination::new(1, 10, 0);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
    }

    #[test]
    fn small_listings_show_every_page() {
        let pages: Vec<_> = Pagination::new(2, 10, 25).iter_pages().collect();
        assert_eq!(pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn gaps_collapse_into_one_placeholder() {
        let pages: Vec<_> = Pagination::new(10, 10, 200).iter_pages().collect();
        assert_eq!(
            pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                None,
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn current_page_near_the_start() {
        let pages: Vec<_> = Pagination::new(1, 10, 100).iter_pages().collect();
        assert_eq!(
            pages,
            vec![Some(1), Some(2), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn iteration_is_restartable() {
        let pagination = Pagination::new(5, 10, 120);
        let first: Vec<_> = pagination.iter_pages().collect();
        let second: Vec<_> = pagination.iter_pages().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        assert_eq!(Pagination::new(1, 10, 0).iter_pages().count(), 0);
    }
}
