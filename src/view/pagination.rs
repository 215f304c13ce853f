use std::ops::Range;

/// Projects per page on the detail screen.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` items; zero when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp a 1-based page into `[1, max(1, total)]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Index range of a 1-based page, cut to `len`.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}
