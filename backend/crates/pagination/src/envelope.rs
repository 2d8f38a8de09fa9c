//! Serialisable page envelope returned by collection endpoints.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::links::PageLinks;
use crate::page::Page;

/// JSON shape of one page of a collection.
///
/// Page numbers are one-based on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// One-based page number.
    pub page: i64,
    /// Requested page size.
    pub limit: i64,
    /// Elements across every page.
    pub total_elements: u64,
    /// Pages needed to hold every element.
    pub total_pages: u64,
    /// Items on this page.
    pub number_of_elements: usize,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// Navigation links.
    pub links: PageLinks,
}

impl<T> PageEnvelope<T> {
    /// Wrap `page` for a response served at `base`.
    #[must_use]
    pub fn from_page(page: Page<T>, base: &Url) -> Self {
        let links = PageLinks::for_page(base, &page);
        let request = page.request();
        let number = request.number();
        let limit = request.size();
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        let number_of_elements = page.number_of_elements();
        let first = page.is_first();
        let last = page.is_last();

        Self {
            content: page.into_content(),
            page: number,
            limit,
            total_elements,
            total_pages,
            number_of_elements,
            first,
            last,
            links,
        }
    }
}
