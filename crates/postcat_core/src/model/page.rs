//! Paging request and page container.
//!
//! # Invariants
//! - `page` is zero-based; `size` must be greater than zero.
//! - `Page::total_elements` counts every matching row, independent of the
//!   requested page.
//! - Sorting always breaks ties by `id` so consecutive pages never overlap.

use serde::{Deserialize, Serialize};

const PAGE_SIZE_DEFAULT: u32 = 10;
const PAGE_SIZE_MAX: u32 = 100;

/// Post columns usable for paged ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSortField {
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
    Visits,
}

impl PostSortField {
    /// Storage column name.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Visits => "visits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Ordering for paged post queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSort {
    pub field: PostSortField,
    pub direction: SortDirection,
}

impl Default for PostSort {
    /// Newest first.
    fn default() -> Self {
        Self {
            field: PostSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// Page specification for paged listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page. Must be > 0.
    pub size: u32,
    /// Ordering; `None` means `PostSort::default()`.
    pub sort: Option<PostSort>,
}

impl PageRequest {
    /// Creates an unsorted request for `page` with `size` rows.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    /// Returns a copy ordered by `field` in `direction`.
    pub fn sorted_by(mut self, field: PostSortField, direction: SortDirection) -> Self {
        self.sort = Some(PostSort { field, direction });
        self
    }

    /// Effective ordering.
    pub fn sort_or_default(&self) -> PostSort {
        self.sort.unwrap_or_default()
    }

    /// Number of rows preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Number of rows this page holds when `total` rows match.
    pub fn expected_len(&self, total: u64) -> usize {
        let remaining = total.saturating_sub(self.offset());
        // Bounded by `size`, which is a u32.
        remaining.min(u64::from(self.size)) as usize
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Builds a page for `request` out of `content` and the overall count.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            let pages = total_elements.div_ceil(u64::from(request.size));
            u32::try_from(pages).unwrap_or(u32::MAX)
        };
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    /// Maps page content while keeping paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Normalizes an untrusted page size. Defaults to 10 and clamps to 100.
pub fn normalize_page_size(size: Option<u32>) -> u32 {
    match size {
        Some(0) | None => PAGE_SIZE_DEFAULT,
        Some(value) if value > PAGE_SIZE_MAX => PAGE_SIZE_MAX,
        Some(value) => value,
    }
}
