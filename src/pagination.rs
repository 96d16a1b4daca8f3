use serde::Serialize;

/// How many numbered page buttons are visible at once.
const PAGES_TO_SHOW: u32 = 3;

/// The visible slice of the pagination bar for the current page.
/// `pages` is empty when there is nothing to paginate (one page or none),
/// in which case the whole bar is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    /// Compute the window: up to three buttons, left-anchored one page
    /// before the current one, never extending past `total_pages`.
    pub fn compute(page: u32, total_pages: u32) -> Self {
        if total_pages <= 1 {
            return Self {
                pages: Vec::new(),
                prev_enabled: false,
                next_enabled: false,
            };
        }
        let start = page.saturating_sub(1).max(1);
        let end = total_pages.min(start + PAGES_TO_SHOW - 1);
        Self {
            pages: (start..=end).collect(),
            prev_enabled: page > 1,
            next_enabled: page < total_pages,
        }
    }
}
