//! Presentational pagination mapping.
//!
//! The backend owns the pagination arithmetic; this module only turns the
//! returned envelope into template-friendly state: a numbered-page window,
//! prev/next enablement, and the "Showing X to Y of Z results" line.

use serde::Serialize;

use crate::domain::pagination::PageEnvelope;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// View model wrapping one page of items. `pages` holds the page-number
/// window with `None` marking an ellipsis.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub summary: String,
}

impl<T> Paginated<T> {
    /// Builds the view model from a backend envelope.
    pub fn from_envelope(envelope: PageEnvelope<T>) -> Self {
        let page = if envelope.page == 0 { 1 } else { envelope.page };
        let pages = get_pages(envelope.total_pages, page, 2, 2, 4, 2);
        let summary = range_summary(page, envelope.page_size, envelope.total);

        Self {
            items: envelope.items,
            pages,
            page,
            total: envelope.total,
            page_size: envelope.page_size,
            has_next: envelope.has_next,
            has_previous: envelope.has_previous,
            summary,
        }
    }
}

impl<T> From<PageEnvelope<T>> for Paginated<T> {
    fn from(envelope: PageEnvelope<T>) -> Self {
        Self::from_envelope(envelope)
    }
}

/// Formats the "Showing X to Y of Z results" line for a page.
pub fn range_summary(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 || page_size == 0 {
        return "No results".to_string();
    }
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(total);
    format!("Showing {start} to {end} of {total} results")
}
