//! Page requests and sort descriptors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction applied to a sort property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest values first.
    Asc,
    /// Largest values first.
    Desc,
}

/// Ordering applied to a page query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    property: String,
    direction: Direction,
}

impl Sort {
    /// Order by `property` in the given direction.
    #[must_use]
    pub fn by(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Name of the sorted property.
    #[must_use]
    pub fn property(&self) -> &str {
        self.property.as_str()
    }

    /// Direction of the ordering.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true when the ordering is descending.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self.direction, Direction::Desc)
    }
}

/// Reasons a [`PageRequest`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The zero-based page index was below zero.
    #[error("page index must not be less than zero, got {index}")]
    NegativePage {
        /// Rejected zero-based index.
        index: i64,
    },
    /// The page size was zero or negative.
    #[error("page size must not be less than one, got {size}")]
    NonPositiveSize {
        /// Rejected page size.
        size: i64,
    },
}

/// A request for one page of a sorted result set.
///
/// Page indices are zero-based. Use [`PageRequest::from_one_based`] when the
/// caller speaks in one-based page numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    index: i64,
    size: i64,
    sort: Sort,
}

impl PageRequest {
    /// Build a request for the zero-based page `index` holding `size` items.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::NegativePage`] when `index` is negative and
    /// [`PageRequestError::NonPositiveSize`] when `size` is below one.
    pub fn new(index: i64, size: i64, sort: Sort) -> Result<Self, PageRequestError> {
        if index < 0 {
            return Err(PageRequestError::NegativePage { index });
        }
        if size < 1 {
            return Err(PageRequestError::NonPositiveSize { size });
        }
        Ok(Self { index, size, sort })
    }

    /// Build a request from a one-based page number.
    ///
    /// Page `1` maps to index `0`. Page `0` and below map to negative indices
    /// and are rejected.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`PageRequest::new`].
    pub fn from_one_based(page: i64, size: i64, sort: Sort) -> Result<Self, PageRequestError> {
        Self::new(page.saturating_sub(1), size, sort)
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(&self) -> i64 {
        self.index
    }

    /// One-based page number, as exposed to HTTP clients.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.index.saturating_add(1)
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Ordering applied before slicing.
    #[must_use]
    pub const fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Number of rows to skip before the page starts.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.index.saturating_mul(self.size)
    }
}
