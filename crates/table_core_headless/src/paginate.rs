use serde::{Deserialize, Serialize};

/// Page size used when a caller supplies zero.
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// Returns the window of `records` shown on the 1-based `current_page`.
///
/// Page `0` is treated as page `1`, and a zero `page_size` falls back to
/// [`DEFAULT_PAGE_SIZE`]. Pages past the end yield an empty slice.
pub fn paginate<T>(records: &[T], current_page: usize, page_size: usize) -> &[T] {
    let page_size = effective_page_size(page_size);
    let current_page = current_page.max(1);
    let start = (current_page - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Number of pages needed for `total_items`. Never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = effective_page_size(page_size);
    total_items.div_ceil(page_size).max(1)
}

/// 1-based item window of one page, for "showing X-Y of N" labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageRange {
    /// First item shown (1-based), or `0` when nothing is shown.
    pub start: usize,
    /// Last item shown (1-based, inclusive), or `0` when nothing is shown.
    pub end: usize,
    /// Items across every page.
    pub total: usize,
}

impl PageRange {
    /// Computes the window for `current_page` using the same clamping as [`paginate`].
    pub fn for_page(total_items: usize, current_page: usize, page_size: usize) -> Self {
        let page_size = effective_page_size(page_size);
        let start = (current_page.max(1) - 1).saturating_mul(page_size);
        if start >= total_items {
            return Self {
                start: 0,
                end: 0,
                total: total_items,
            };
        }
        Self {
            start: start + 1,
            end: start.saturating_add(page_size).min(total_items),
            total: total_items,
        }
    }

    /// Returns `true` when the window shows no items.
    pub fn is_empty(&self) -> bool {
        self.start == 0
    }
}

/// One entry of a pagination control's page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A gap of hidden page numbers.
    Ellipsis,
}

/// Builds the page strip for a pagination control.
///
/// The first and last pages are always listed, along with `siblings` pages either side of
/// `current_page`. Gaps of two or more hidden pages collapse into [`PageItem::Ellipsis`]; a gap
/// of exactly one page lists that page instead.
pub fn page_items(current_page: usize, total_pages: usize, siblings: usize) -> Vec<PageItem> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    let window_start = current_page.saturating_sub(siblings).max(1);
    let window_end = current_page.saturating_add(siblings).min(total_pages);

    let mut items = Vec::new();
    let mut last_listed = 0;
    let mut push_page = |page: usize, items: &mut Vec<PageItem>| {
        if page <= last_listed {
            return;
        }
        match page - last_listed {
            1 => {}
            2 => items.push(PageItem::Page(last_listed + 1)),
            _ => items.push(PageItem::Ellipsis),
        }
        items.push(PageItem::Page(page));
        last_listed = page;
    };

    push_page(1, &mut items);
    for page in window_start..=window_end {
        push_page(page, &mut items);
    }
    push_page(total_pages, &mut items);
    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn third_page_of_twenty_five_holds_the_last_five() {
        let records: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&records, 3, 10), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let records: Vec<usize> = (0..5).collect();
        assert!(paginate(&records, 2, 10).is_empty());
        assert!(paginate::<usize>(&[], 1, 10).is_empty());
    }

    #[test]
    fn zero_page_and_zero_size_are_clamped() {
        let records: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&records, 0, 10), paginate(&records, 1, 10));
        assert_eq!(paginate(&records, 1, 0).len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let records: Vec<usize> = (0..3).collect();
        assert!(paginate(&records, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn total_pages_rounds_up_and_is_at_least_one() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn page_range_reports_one_based_window() {
        assert_eq!(
            PageRange::for_page(25, 3, 10),
            PageRange {
                start: 21,
                end: 25,
                total: 25
            }
        );
        assert!(PageRange::for_page(0, 1, 10).is_empty());
    }

    #[test]
    fn short_strips_list_every_page() {
        assert_eq!(page_items(2, 4, 1), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(page_items(1, 1, 1), vec![Page(1)]);
    }

    #[test]
    fn long_strips_collapse_gaps() {
        assert_eq!(
            page_items(10, 20, 1),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(1, 20, 1),
            vec![Page(1), Page(2), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn single_hidden_page_is_listed_instead_of_ellipsis() {
        assert_eq!(
            page_items(4, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(page_items(99, 3, 1), vec![Page(1), Page(2), Page(3)]);
    }
}
