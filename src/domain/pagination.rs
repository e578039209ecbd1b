// src/domain/pagination.rs

/// Number of consecutive page links shown around the current page.
pub const WINDOW: u32 = 5;

/// One element of the pagination bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// `None` when already on the first page.
    Previous(Option<u32>),
    Page { number: u32, active: bool },
    Ellipsis,
    /// `None` when already on the last page.
    Next(Option<u32>),
}

/// Compute the pagination bar for `current` of `total` pages.
///
/// Returns an empty bar when there is at most one page. The page-number run always
/// holds `min(WINDOW, total)` consecutive pages; page 1 and the last page are added
/// (with an ellipsis when there is a gap) if the run does not reach them.
pub fn page_links(current: u32, total: u32) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }

    let (start, end) = window_bounds(current, total);
    let mut links = Vec::with_capacity(WINDOW as usize + 6);

    links.push(PageLink::Previous((current > 1).then(|| current - 1)));

    if start > 1 {
        links.push(PageLink::Page {
            number: 1,
            active: current == 1,
        });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    for number in start..=end {
        links.push(PageLink::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        if end < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page {
            number: total,
            active: current == total,
        });
    }

    links.push(PageLink::Next((current < total).then(|| current + 1)));

    links
}

/// Inclusive `[start, end]` run of page numbers around `current`.
pub fn window_bounds(current: u32, total: u32) -> (u32, u32) {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(WINDOW / 2).max(1);
    let end = start.saturating_add(WINDOW - 1).min(total);

    // Near the end the run saturates; slide it left to keep WINDOW pages.
    if end - start < WINDOW - 1 {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }

    (start, end)
}

/// Whether a navigation request to `page` should be honoured.
pub fn is_navigable(page: u32, total: u32) -> bool {
    (1..=total).contains(&page)
}
