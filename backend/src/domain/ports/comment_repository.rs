//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::{ArticleId, Comment, CommentDraft, CommentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message } =>
            "comment repository query failed: {message}",
    }
}

/// Port for storing and reading comments.
///
/// Adapters do not check that the owning article exists; services do.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a comment under `article_id` and return it with its identifier.
    async fn insert(
        &self,
        article_id: ArticleId,
        draft: &CommentDraft,
    ) -> Result<Comment, CommentRepositoryError>;

    /// Find a comment by identifier.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// List every comment of one article in store order.
    async fn list_by_article(
        &self,
        article_id: ArticleId,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Overwrite the stored content and writer of `comment`.
    ///
    /// Returns `None` when no row carries the comment's identifier.
    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Remove the comment with `id`, returning whether a row was deleted.
    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError>;
}
