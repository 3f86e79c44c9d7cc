// ============================================================================
// PAGINATION - which page controls the pager shows
// ============================================================================

/// One control in the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
    /// Jump-to-last-page control
    Last(u32),
}

/// Sliding window of `window` page buttons around `current`.
///
/// With `total <= window` every page is listed. Otherwise the window is
/// centred on `current` and shifted inward near either end; when it stops
/// short of the final page an ellipsis and a jump-to-last control follow.
pub fn page_window(current: u32, total: u32, window: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let window = window.max(1);
    let current = current.clamp(1, total);

    if total <= window {
        return (1..=total).map(PageItem::Page).collect();
    }

    let half = window / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + window - 1).min(total);
    start = (end + 1).saturating_sub(window).max(1);

    let mut items: Vec<PageItem> = (start..=end).map(PageItem::Page).collect();
    if end < total {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Last(total));
    }
    items
}
