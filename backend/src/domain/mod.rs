//! Domain entities, ports and services.
//!
//! Purpose: define the article and comment model and the record-manager
//! use-cases that operate on it. Types here stay free of HTTP and SQL
//! concerns; adapters under `inbound` and `outbound` translate at the edges.
//!
//! Public surface:
//! - `Article`, `Comment` with their drafts and views.
//! - `Error`/`ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request correlation identifier.
//! - `ArticleService`, `CommentService`: driving-port implementations.

mod article;
mod article_service;
mod comment;
mod comment_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::article::{Article, ArticleDraft, ArticleId, ArticleView};
pub use self::article_service::{ARTICLE_SORT_PROPERTY, ArticleService};
pub use self::comment::{Comment, CommentDraft, CommentId, CommentView};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
