//! Pagination presentation: page windows, anchors, and result spans.
//!
//! Pure functions of integers, invoked fresh per render. The navigable page
//! list is a sliding window of five pages around the current one, with page 1
//! and the last page anchored outside it and ellipses marking real gaps.

/// Pages shown inside the sliding window.
pub const WINDOW: u32 = 5;

/// One entry of the rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Compute the truncated page list for a pager.
///
/// The window is centered on `current` and shifted, never shrunk, at either
/// end. Anchors for page 1 and `total_pages` appear when the window does not
/// already include them; an ellipsis separates an anchor from the window
/// whenever the numeric gap between them exceeds one page.
pub fn page_links(current: u32, total_pages: u32) -> Vec<PageLink> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(WINDOW / 2).max(1);
    let end = (start + WINDOW - 1).min(total);
    // Truncated at the high end: shift the start down to keep the window full.
    if end - start + 1 < WINDOW {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }

    let mut links = Vec::with_capacity(WINDOW as usize + 4);

    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    for page in start..=end {
        links.push(PageLink::Page(page));
    }
    if end < total {
        if total - end > 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total));
    }

    links
}

/// The "showing X–Y of Z" span for a results header.
///
/// Returns `(0, 0)` when there are no results at all.
pub fn result_span(current: u32, page_size: u32, total_count: u64) -> (u64, u64) {
    if total_count == 0 {
        return (0, 0);
    }
    let current = u64::from(current.max(1));
    let page_size = u64::from(page_size);
    let first = (current - 1) * page_size + 1;
    let last = (current * page_size).min(total_count);
    (first, last)
}
