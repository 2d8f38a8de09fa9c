//! One slice of a sorted result set plus derived navigation metadata.

use crate::request::PageRequest;

/// Items for one page together with the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request` from a set of `total_elements`.
    #[must_use]
    pub const fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Items on this page, in query order.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Request that selected this page.
    #[must_use]
    pub const fn request(&self) -> &PageRequest {
        &self.request
    }

    /// One-based page number.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.request.number()
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.request.size()
    }

    /// Total number of elements across every page.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of items on this page.
    #[must_use]
    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// Number of pages needed to hold every element. Zero when the set is
    /// empty.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_elements
            .div_ceil(self.request.size().unsigned_abs())
    }

    /// True for the page at index zero.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.request.index() == 0
    }

    /// True when a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.request.index().unsigned_abs().saturating_add(1) < self.total_pages()
    }

    /// True when no later page exists.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// True when an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.request.index() > 0
    }

    /// Transform every item while keeping the paging metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}
