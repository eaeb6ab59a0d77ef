//! Page-boundary detection shared by every auto-paginating list endpoint.

/// Whether a paginated API numbers its first page 0 or 1.
///
/// Sinch APIs are split on this: SMS batches and Verification count from 0,
/// Numbers and Conversation count from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageStart {
    ZeroBased,
    OneBased,
}

impl PageStart {
    fn first_page(self) -> u64 {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }
}

/// Returns `true` when no items remain beyond the current page.
///
/// `page` is interpreted under `start`; the page is last exactly when the
/// item index one past this page reaches `total_items`.
pub fn is_last_page(page: u64, page_size: u64, total_items: u64, start: PageStart) -> bool {
    let pages_consumed = page + 1 - start.first_page();
    pages_consumed.saturating_mul(page_size) >= total_items
}

/// Boundary check for APIs that report only the current page's item count:
/// a short page (or an empty one) is the final page.
pub fn is_last_page_by_count(items_on_page: usize, page_size: u64) -> bool {
    (items_on_page as u64) < page_size
}
