//! Offset pagination primitives shared by article-board endpoints.
//!
//! The crate models the paging contract between inbound adapters and
//! persistence adapters:
//!
//! - [`PageRequest`] carries a zero-based page index, a page size and a
//!   [`Sort`]. Adapters translate it into `OFFSET`/`LIMIT` clauses.
//! - [`Page`] wraps one slice of results together with the total element
//!   count reported by the store, and derives the navigation metadata.
//! - [`PageEnvelope`] and [`PageLinks`] are the serialisable shapes returned
//!   to HTTP clients, which address pages with one-based numbers.
//!
//! # Examples
//!
//! ```
//! use pagination::{Direction, Page, PageRequest, Sort};
//!
//! let request = PageRequest::from_one_based(2, 10, Sort::by("id", Direction::Desc))
//!     .expect("valid request");
//! assert_eq!(request.index(), 1);
//! assert_eq!(request.offset(), 10);
//!
//! let page = Page::new(vec!["a", "b"], request, 12);
//! assert_eq!(page.total_pages(), 2);
//! assert!(page.is_last());
//! ```

mod envelope;
mod links;
mod page;
mod request;

pub use envelope::PageEnvelope;
pub use links::{LIMIT_PARAM, PAGE_PARAM, PageLinks};
pub use page::Page;
pub use request::{Direction, PageRequest, PageRequestError, Sort};
