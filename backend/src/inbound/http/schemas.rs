//! OpenAPI schema definitions for domain and paging types.
//!
//! Domain types and the `pagination` crate stay free of `utoipa`. The
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed, fails validation, or addresses a comment
    /// through the wrong article.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency such as the database is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "comment 10 does not belong to article 2")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ArticleView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ArticleView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ArticleSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Hello")]
    title: String,
    #[schema(example = "World")]
    content: String,
    #[schema(example = "Alice")]
    writer: String,
}

/// OpenAPI schema for [`crate::domain::CommentView`]. The owning article
/// comes from the path and is not repeated.
#[derive(ToSchema)]
#[schema(as = crate::domain::CommentView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommentSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Nice post")]
    content: String,
    #[schema(example = "Bob")]
    writer: String,
}

/// OpenAPI schema for [`pagination::PageLinks`].
#[derive(ToSchema)]
#[schema(as = pagination::PageLinks)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageLinksSchema {
    /// The page that was served.
    #[schema(rename = "self", example = "http://localhost:8080/articles?page=2&limit=20")]
    self_: String,
    /// The first page.
    first: String,
    /// The last page.
    last: String,
    /// The following page, absent on the last page.
    next: Option<String>,
    /// The preceding page, absent on the first page.
    prev: Option<String>,
}

/// OpenAPI schema for a page of articles.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ArticlePageSchema {
    /// Articles on this page, newest first.
    content: Vec<ArticleSchema>,
    /// One-based page number.
    #[schema(example = 1)]
    page: i64,
    /// Requested page size.
    #[schema(example = 20)]
    limit: i64,
    /// Articles across every page.
    total_elements: u64,
    /// Pages needed to hold every article.
    total_pages: u64,
    /// Articles on this page.
    number_of_elements: u64,
    /// Whether this is the first page.
    first: bool,
    /// Whether this is the last page.
    last: bool,
    /// Navigation links.
    links: PageLinksSchema,
}
