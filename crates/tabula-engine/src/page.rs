//! Page slicing and compact page-number sequences.

use serde::{Deserialize, Serialize};

/// Items-per-page values a view offers by default.
pub const PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Default width of the page-number window (endpoints included).
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Transient pagination state of one list view.
///
/// `current_page` is 1-based and must stay within
/// `[1, ceil(total_items / items_per_page)]` whenever there are items; the
/// owning [`ListState`](crate::ListState) resets it to 1 on every search,
/// filter, or per-page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageState {
    /// Fresh state on page 1 with no items counted yet.
    pub fn new(items_per_page: usize) -> Self {
        PageState {
            current_page: 1,
            items_per_page,
            total_items: 0,
        }
    }

    /// Total page count for the current item count; 0 when there are no items.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pulls `current_page` back into range after the filtered set changed.
    pub fn clamp(&mut self) {
        let max = self.total_pages().max(1);
        if self.current_page > max {
            self.current_page = max;
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }
}

fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if total_items == 0 || items_per_page == 0 {
        0
    } else {
        total_items.div_ceil(items_per_page)
    }
}

/// One page of records plus the page count for the whole collection.
#[derive(Debug)]
pub struct PageSlice<'a, T> {
    pub page_items: &'a [T],
    pub total_pages: usize,
}

/// Cuts the current page out of a (already searched and filtered)
/// collection.
///
/// Does not self-correct an out-of-range `current_page`: a page past the end
/// yields an empty slice, and clamping back to 1 after a filter change is
/// the caller's contract (see [`PageState::clamp`]).
pub fn paginate<'a, T>(records: &'a [T], state: &PageState) -> PageSlice<'a, T> {
    let total_pages = total_pages(records.len(), state.items_per_page);
    let start = state
        .current_page
        .saturating_sub(1)
        .saturating_mul(state.items_per_page);
    let end = start.saturating_add(state.items_per_page).min(records.len());
    let page_items = if start >= records.len() {
        &records[0..0]
    } else {
        &records[start..end]
    };
    PageSlice {
        page_items,
        total_pages,
    }
}

/// One entry in a rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    /// A navigable page number.
    Page(usize),
    /// A non-navigable ellipsis covering the pages elided between its
    /// neighbours.
    Gap,
}

impl std::fmt::Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Gap => write!(f, "..."),
        }
    }
}

/// Builds the `1 ... c-1 c c+1 ... N` page-indicator sequence.
///
/// Pages 1 and `total` always appear (when `total >= 1`). When `total`
/// exceeds `window`, a block of consecutive pages sits next to whichever
/// endpoint `current` is close to, or centers on `current` otherwise, and a
/// gap marker fills each elided stretch. Pure and deterministic: identical
/// `(current, total)` pairs produce identical sequences.
pub fn build_page_numbers(current: usize, total: usize, window: usize) -> Vec<PageMarker> {
    if total == 0 {
        return Vec::new();
    }
    if total <= window.max(3) {
        return (1..=total).map(PageMarker::Page).collect();
    }

    // Width of the inner block, excluding the two endpoint pages.
    let half = (window.max(3) - 2) / 2;
    let (start, end) = if current <= half + 2 {
        // Pinned against the start: 2..=4 for the default window.
        (2, window.max(3) - 1)
    } else if current + half + 1 >= total {
        // Pinned against the end: the last block before `total`.
        (total + 2 - window.max(3), total - 1)
    } else {
        (current - half, current + half)
    };

    let mut markers = vec![PageMarker::Page(1)];
    if start > 2 {
        markers.push(PageMarker::Gap);
    }
    markers.extend((start..=end).map(PageMarker::Page));
    if end + 1 < total {
        markers.push(PageMarker::Gap);
    }
    markers.push(PageMarker::Page(total));
    markers
}
