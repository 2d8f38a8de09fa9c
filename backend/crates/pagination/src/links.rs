//! Navigation links for paged collection endpoints.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::page::Page;

/// Query parameter carrying the one-based page number.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";

/// Absolute URLs for moving around a paged collection.
///
/// Links keep every unrelated query parameter of the base URL and replace
/// `page` and `limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// The page that was served.
    #[serde(rename = "self")]
    pub self_: String,
    /// The first page.
    pub first: String,
    /// The last page. Equal to `first` when the collection is empty.
    pub last: String,
    /// The following page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// The preceding page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

impl PageLinks {
    /// Build links for `page` relative to the request URL `base`.
    #[must_use]
    pub fn for_page<T>(base: &Url, page: &Page<T>) -> Self {
        let request = page.request();
        let size = request.size();
        let current = request.number();
        let last = i64::try_from(page.total_pages().max(1)).unwrap_or(i64::MAX);

        Self {
            self_: page_url(base, current, size),
            first: page_url(base, 1, size),
            last: page_url(base, last, size),
            next: page
                .has_next()
                .then(|| page_url(base, current.saturating_add(1), size)),
            prev: page
                .has_previous()
                .then(|| page_url(base, current.saturating_sub(1), size)),
        }
    }
}

fn page_url(base: &Url, number: i64, size: i64) -> String {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM && key != LIMIT_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(PAGE_PARAM, &number.to_string())
        .append_pair(LIMIT_PARAM, &size.to_string());
    url.into()
}
