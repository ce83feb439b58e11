//! Navigation selection logic
//!
//! Pure functions for list selection, page cycling and the "load more" limit.

use crate::Page;

/// Default rows revealed per "load more" step
pub const PAGE_SIZE: usize = 20;

/// Next selection index, wrapping to the start
///
/// # Examples
/// ```
/// use ceka::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous selection index, wrapping to the end
///
/// # Examples
/// ```
/// use ceka::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => i.min(list_len) - 1,
    })
}

/// Keep a selection valid after the list changed length
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// Grow the visible row limit by one page, never past the list length
///
/// # Examples
/// ```
/// use ceka::logic::navigation::{grow_limit, PAGE_SIZE};
///
/// assert_eq!(grow_limit(PAGE_SIZE, 100, PAGE_SIZE), PAGE_SIZE * 2);
/// assert_eq!(grow_limit(PAGE_SIZE, 25, PAGE_SIZE), 25);
/// ```
pub fn grow_limit(limit: usize, total: usize, page_size: usize) -> usize {
    (limit + page_size).min(total.max(page_size))
}

/// Whether the list has rows beyond the current limit
pub fn has_more(limit: usize, total: usize) -> bool {
    total > limit
}

/// Next page in tab order, wrapping
pub fn next_page(current: Page) -> Page {
    let idx = (current.index() + 1) % Page::ALL.len();
    Page::ALL[idx]
}

/// Previous page in tab order, wrapping
pub fn prev_page(current: Page) -> Page {
    let len = Page::ALL.len();
    let idx = (current.index() + len - 1) % len;
    Page::ALL[idx]
}

/// Page bound to a digit key ('1' = first tab)
pub fn page_for_digit(digit: char) -> Option<Page> {
    let n = digit.to_digit(10)? as usize;
    if n == 0 {
        return None;
    }
    Page::ALL.get(n - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_selection_out_of_range_current() {
        // Stale selection beyond a shrunk list moves to the last row
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(5), 3), Some(2));
        assert_eq!(clamp_selection(None, 3), Some(0));
        assert_eq!(clamp_selection(Some(1), 0), None);
    }

    #[test]
    fn test_grow_limit_small_list_keeps_page_size() {
        assert_eq!(grow_limit(PAGE_SIZE, 5, PAGE_SIZE), PAGE_SIZE);
    }

    #[test]
    fn test_has_more() {
        assert!(has_more(20, 21));
        assert!(!has_more(20, 20));
    }

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(next_page(Page::Profile), Page::Bills);
        assert_eq!(prev_page(Page::Bills), Page::Profile);
        assert_eq!(next_page(Page::Bills), Page::Resources);
    }

    #[test]
    fn test_page_for_digit() {
        assert_eq!(page_for_digit('1'), Some(Page::Bills));
        assert_eq!(page_for_digit('7'), Some(Page::Profile));
        assert_eq!(page_for_digit('8'), None);
        assert_eq!(page_for_digit('0'), None);
        assert_eq!(page_for_digit('x'), None);
    }
}
