//! Driving port for comment mutations scoped to a parent article.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ArticleId, CommentDraft, CommentId, CommentView, Error};

/// Request to add a comment to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub article_id: ArticleId,
    pub draft: CommentDraft,
}

/// Request to edit a comment. `article_id` comes from the request path and
/// must match the comment's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub article_id: ArticleId,
    pub comment_id: CommentId,
    pub draft: CommentDraft,
}

/// Request to remove a comment from an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCommentRequest {
    pub article_id: ArticleId,
    pub comment_id: CommentId,
}

/// Driving port for comment mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Add a comment, failing with `NotFound` when the article is missing.
    async fn create_comment(&self, request: CreateCommentRequest) -> Result<CommentView, Error>;

    /// Edit a comment.
    ///
    /// Fails with `NotFound` when the comment is missing and with
    /// `InvalidRequest` when it belongs to another article.
    async fn update_comment(&self, request: UpdateCommentRequest) -> Result<CommentView, Error>;

    /// Remove a comment, with the same failure modes as
    /// [`CommentCommand::update_comment`].
    async fn delete_comment(&self, request: DeleteCommentRequest) -> Result<(), Error>;
}
