use std::fmt;

use crate::domain::shelves::ShelfPage;
use crate::domain::year_window::YearWindow;

/// Why paging through a shelf stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StopReason {
    EmptyPage,
    AllItemsFetched,
    SinglePage,
    LastPage,
    PastWindowStart,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::EmptyPage => "empty page",
            StopReason::AllItemsFetched => "all items fetched",
            StopReason::SinglePage => "single page",
            StopReason::LastPage => "last page",
            StopReason::PastWindowStart => "past window start",
        })
    }
}

/// Decide whether `page` (the `page_number`th, 1-based) is the last one worth
/// fetching. `fetched` counts every item accumulated so far, including this
/// page. Any one condition is sufficient; they are not ordered.
///
/// Relies on upstream returning items newest first across all pages, so once
/// the oldest item on a page predates the window nothing later can be inside it.
pub fn stop_reason(
    page_number: u64,
    page: &ShelfPage,
    fetched: usize,
    window: &YearWindow,
) -> Option<StopReason> {
    let Some(oldest) = page.oldest() else {
        return Some(StopReason::EmptyPage);
    };

    if page.count <= fetched as u64 {
        Some(StopReason::AllItemsFetched)
    } else if page.pages <= 1 {
        Some(StopReason::SinglePage)
    } else if page_number >= page.pages {
        Some(StopReason::LastPage)
    } else if window.starts_after(&oldest.created_time) {
        Some(StopReason::PastWindowStart)
    } else {
        None
    }
}
