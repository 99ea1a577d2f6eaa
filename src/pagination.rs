//! Page-window math for the pagination bar.
use std::ops::RangeInclusive;

pub const MOVIES_PER_PAGE: u32 = 10;
/// Page buttons shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    pub start: u32,
    pub end: u32,
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl PageWindow {
    pub fn compute(current: u32, total_results: u32) -> Self {
        let current = current.max(1);
        let total_pages = total_pages(total_results);
        let start = current.saturating_sub(WINDOW_RADIUS).max(1);
        let end = current.saturating_add(WINDOW_RADIUS).min(total_pages);
        let previous = (current > 1).then(|| current - 1);
        let next = (current < total_pages).then(|| current + 1);
        Self {
            current,
            total_pages,
            start,
            end,
            previous,
            next,
        }
    }

    /// Page numbers to render as buttons; empty when there are no pages.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current
    }
}

pub fn total_pages(total_results: u32) -> u32 {
    total_results.div_ceil(MOVIES_PER_PAGE)
}

/// Missing, unparsable, or zero page numbers fall back to the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(127), 13);
    }

    #[test]
    fn window_is_centred_on_current_page() {
        let w = PageWindow::compute(7, 127);
        assert_eq!(w.total_pages, 13);
        assert_eq!(w.pages().collect::<Vec<_>>(), vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(w.previous, Some(6));
        assert_eq!(w.next, Some(8));
    }

    #[test]
    fn window_is_clipped_at_both_ends() {
        let first = PageWindow::compute(1, 127);
        assert_eq!(first.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(first.previous, None);

        let last = PageWindow::compute(13, 127);
        assert_eq!(last.pages().collect::<Vec<_>>(), vec![10, 11, 12, 13]);
        assert_eq!(last.next, None);
    }

    #[test]
    fn window_never_leaves_valid_range() {
        for total_results in [0u32, 1, 9, 10, 11, 35, 99, 100, 101, 1_000] {
            let total = total_pages(total_results);
            for current in 1..=total + 5 {
                let w = PageWindow::compute(current, total_results);
                for page in w.pages() {
                    assert!(
                        page >= 1 && page <= total,
                        "page {} outside 1..={} (current {})",
                        page,
                        total,
                        current
                    );
                }
                if let Some(next) = w.next {
                    assert!(next <= total);
                }
            }
        }
    }

    #[test]
    fn no_results_means_no_page_buttons() {
        let w = PageWindow::compute(1, 0);
        assert_eq!(w.pages().count(), 0);
        assert_eq!(w.previous, None);
        assert_eq!(w.next, None);
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let w = PageWindow::compute(1, 4);
        assert_eq!(w.pages().collect::<Vec<_>>(), vec![1]);
        assert!(w.is_current(1));
        assert_eq!(w.previous, None);
        assert_eq!(w.next, None);
    }

    #[test]
    fn page_parameter_defaults_to_first_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some(" 4 ")), 4);
    }
}
