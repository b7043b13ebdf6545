//! Paginated list-view state.
//!
//! A list view fetches exactly one server page at a time and keeps the
//! totals the server reports. Page-number controls show a sliding window of
//! at most [`MAX_PAGE_BUTTONS`] buttons around the current page.

use crate::envelope::Page;
use crate::filter::{self, Searchable};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page size used when a list view is first opened.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum number of page-number buttons shown at once.
pub const MAX_PAGE_BUTTONS: u32 = 5;

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// Page indices (zero-based) for the page-number buttons.
///
/// The window holds at most five pages, centred on `current` and clamped at
/// both ends of the sequence.
///
/// # Examples
///
/// ```
/// use promo_core::pagination::page_window;
/// assert_eq!(page_window(12, 0), vec![0, 1, 2, 3, 4]);
/// assert_eq!(page_window(12, 5), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(12, 11), vec![7, 8, 9, 10, 11]);
/// ```
pub fn page_window(total_pages: u32, current: u32) -> Vec<u32> {
    let start = if total_pages <= MAX_PAGE_BUTTONS || current < 3 {
        0
    } else if current > total_pages - 4 {
        total_pages - MAX_PAGE_BUTTONS
    } else {
        current - 2
    };
    let len = total_pages.min(MAX_PAGE_BUTTONS);
    (start..start + len).collect()
}

// ---------------------------------------------------------------------------
// Showing range
// ---------------------------------------------------------------------------

/// The "showing X - Y of Z" figures for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

impl ShowingRange {
    /// Render as `Mostrando X - Y de Z {noun}`.
    pub fn label(&self, noun: &str) -> String {
        format!("Mostrando {} - {} de {} {noun}", self.from, self.to, self.total)
    }
}

// ---------------------------------------------------------------------------
// Page state
// ---------------------------------------------------------------------------

/// Page index, page size and the totals from the last fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    size: u32,
    total_pages: u32,
    total_elements: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(size: u32) -> Self {
        Self {
            page: 0,
            size: size.max(1),
            total_pages: 0,
            total_elements: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Change the page size. Always resets the page index to zero so the
    /// next fetch cannot land past the end.
    pub fn set_page_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.page = 0;
    }

    /// Move to `page` if it exists. Returns `false` and leaves the state
    /// untouched otherwise.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page < self.total_pages {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    /// Set the page index without checking it against the totals. Used for
    /// the very first fetch, before any totals are known.
    pub fn request(&mut self, page: u32) {
        self.page = page;
    }

    /// Record the totals reported with a fetched page.
    pub fn record_totals<T>(&mut self, page: &Page<T>) {
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
    }

    pub fn window(&self) -> Vec<u32> {
        page_window(self.total_pages, self.page)
    }

    pub fn showing(&self) -> ShowingRange {
        let size = u64::from(self.size);
        let page = u64::from(self.page);
        ShowingRange {
            from: page * size + 1,
            to: ((page + 1) * size).min(self.total_elements),
            total: self.total_elements,
        }
    }
}

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

/// One paginated, locally filtered table.
///
/// The filter term applies to the rows of the fetched page only; it never
/// triggers a server-side search.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub state: PageState,
    rows: Vec<T>,
    loading: bool,
    term: String,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListView<T> {
    pub fn new(size: u32) -> Self {
        Self {
            state: PageState::new(size),
            rows: Vec::new(),
            loading: false,
            term: String::new(),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Whether a filter term is active.
    pub fn is_filtered(&self) -> bool {
        !self.term.is_empty()
    }

    /// Mark a fetch as in flight.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Store a fetched page and its totals.
    pub fn loaded(&mut self, page: Page<T>) {
        self.state.record_totals(&page);
        self.rows = page.content;
        self.loading = false;
    }

    /// A failed fetch leaves the table empty. Totals are kept so page
    /// controls stay usable for a manual re-fetch.
    pub fn failed(&mut self) {
        self.rows.clear();
        self.loading = false;
    }
}

impl<T: Searchable> ListView<T> {
    /// Rows of the current page matching the filter term.
    pub fn visible(&self) -> Vec<&T> {
        filter::filter_items(&self.rows, &self.term)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
