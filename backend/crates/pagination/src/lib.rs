//! Page request and pagination envelope primitives for storefront listings.
//!
//! Listings are filtered and ordered in memory before they reach this crate.
//! [`Page::from_items`] then slices the ordered sequence into the envelope
//! returned to callers, so the page boundaries always follow the final order.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 2).expect("valid request");
//! let page = Page::from_items(vec!["a", "b", "c", "d", "e"], request);
//!
//! assert_eq!(page.items(), &["c", "d"]);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_next());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of items per page when callers do not specify one.
pub const DEFAULT_PER_PAGE: u32 = 24;

/// Largest page size a request may ask for.
pub const MAX_PER_PAGE: u32 = 100;

/// Errors returned when a page request is out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Pages are numbered from one.
    #[error("page must be at least 1 (got {page})")]
    PageOutOfRange {
        /// The rejected page number.
        page: u32,
    },

    /// The page size is zero or above [`MAX_PER_PAGE`].
    #[error("per_page must be between 1 and {max} (got {per_page})")]
    PerPageOutOfRange {
        /// The rejected page size.
        per_page: u32,
        /// The largest accepted page size.
        max: u32,
    },
}

/// A validated one-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageRequest {
    page: u32,
    per_page: u32,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PaginationError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.page, raw.per_page)
    }
}

impl PageRequest {
    /// Validate and build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when `page` is zero and
    /// [`PaginationError::PerPageOutOfRange`] when `per_page` is zero or
    /// larger than [`MAX_PER_PAGE`].
    pub const fn new(page: u32, per_page: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::PageOutOfRange { page });
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(PaginationError::PerPageOutOfRange {
                per_page,
                max: MAX_PER_PAGE,
            });
        }
        Ok(Self { page, per_page })
    }

    /// First page with the given size, falling back to [`DEFAULT_PER_PAGE`]
    /// when the size is out of range.
    #[must_use]
    pub const fn first(per_page: u32) -> Self {
        match Self::new(1, per_page) {
            Ok(request) => request,
            Err(_) => Self {
                page: 1,
                per_page: DEFAULT_PER_PAGE,
            },
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    fn offset(self) -> usize {
        let skipped_pages = usize::try_from(self.page.saturating_sub(1)).unwrap_or(usize::MAX);
        skipped_pages.saturating_mul(self.per_page_usize())
    }

    fn per_page_usize(self) -> usize {
        usize::try_from(self.per_page).unwrap_or(usize::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PER_PAGE)
    }
}

/// One page of an ordered listing plus the totals needed for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    per_page: u32,
    total_items: usize,
    total_pages: usize,
    has_next: bool,
    has_previous: bool,
}

impl<T> Page<T> {
    /// Slice `items` according to `request`.
    ///
    /// Requests past the last page produce an empty page that still reports
    /// the listing totals.
    #[must_use]
    pub fn from_items(items: Vec<T>, request: PageRequest) -> Self {
        let total_items = items.len();
        let per_page = request.per_page_usize();
        let total_pages = total_items.div_ceil(per_page);
        let offset = request.offset();
        let page_items: Vec<T> = items.into_iter().skip(offset).take(per_page).collect();
        let current = usize::try_from(request.page()).unwrap_or(usize::MAX);

        Self {
            items: page_items,
            page: request.page(),
            per_page: request.per_page(),
            total_items,
            total_pages,
            has_next: current < total_pages,
            has_previous: current > 1,
        }
    }

    /// Items on this page, in listing order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of items across every page.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages needed to show every item.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether a later page holds items.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Transform the items while keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
