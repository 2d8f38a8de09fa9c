//! Comment record manager.
//!
//! Every operation is scoped to the article named in the request path.
//! Creation and listing require that article to exist. Edits and deletions
//! first resolve the comment and then check that it belongs to that article,
//! so a comment reached through the wrong parent is rejected rather than
//! reported missing.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::article_service::map_repository_error as map_article_repository_error;
use crate::domain::ports::{
    ArticleRepository, CommentCommand, CommentQuery, CommentRepository, CommentRepositoryError,
    CreateCommentRequest, DeleteCommentRequest, ListCommentsRequest, UpdateCommentRequest,
};
use crate::domain::{ArticleId, Comment, CommentId, CommentView, Error};

fn map_comment_repository_error(error: CommentRepositoryError) -> Error {
    error!(%error, "comment repository failure");
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
    }
}

fn article_not_found(id: ArticleId) -> Error {
    Error::not_found(format!("article {id} not found"))
}

fn comment_not_found(id: CommentId) -> Error {
    Error::not_found(format!("comment {id} not found"))
}

fn ownership_mismatch(comment: &Comment, article_id: ArticleId) -> Error {
    Error::invalid_request(format!(
        "comment {} does not belong to article {article_id}",
        comment.id()
    ))
    .with_details(json!({
        "articleId": article_id,
        "commentId": comment.id(),
        "code": "comment_article_mismatch",
    }))
}

/// Comment service implementing the command and query driving ports.
#[derive(Clone)]
pub struct CommentService<C, A> {
    comment_repo: Arc<C>,
    article_repo: Arc<A>,
}

impl<C, A> CommentService<C, A> {
    /// Create a new service over the comment and article repositories.
    pub fn new(comment_repo: Arc<C>, article_repo: Arc<A>) -> Self {
        Self {
            comment_repo,
            article_repo,
        }
    }
}

impl<C, A> CommentService<C, A>
where
    C: CommentRepository,
    A: ArticleRepository,
{
    async fn require_article(&self, article_id: ArticleId) -> Result<(), Error> {
        let exists = self
            .article_repo
            .exists(article_id)
            .await
            .map_err(map_article_repository_error)?;
        if exists {
            Ok(())
        } else {
            Err(article_not_found(article_id))
        }
    }

    /// Resolve `comment_id` and confirm it belongs to `article_id`.
    async fn owned_comment(
        &self,
        article_id: ArticleId,
        comment_id: CommentId,
    ) -> Result<Comment, Error> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await
            .map_err(map_comment_repository_error)?
            .ok_or_else(|| comment_not_found(comment_id))?;

        if !comment.belongs_to(article_id) {
            warn!(
                comment_id,
                article_id,
                owner_id = comment.article_id(),
                "comment addressed through another article"
            );
            return Err(ownership_mismatch(&comment, article_id));
        }
        Ok(comment)
    }
}

#[async_trait]
impl<C, A> CommentCommand for CommentService<C, A>
where
    C: CommentRepository,
    A: ArticleRepository,
{
    async fn create_comment(&self, request: CreateCommentRequest) -> Result<CommentView, Error> {
        let CreateCommentRequest { article_id, draft } = request;
        self.require_article(article_id).await?;

        let comment = self
            .comment_repo
            .insert(article_id, &draft)
            .await
            .map_err(map_comment_repository_error)?;

        info!(article_id, comment_id = comment.id(), "comment created");
        Ok(CommentView::from(comment))
    }

    async fn update_comment(&self, request: UpdateCommentRequest) -> Result<CommentView, Error> {
        let UpdateCommentRequest {
            article_id,
            comment_id,
            draft,
        } = request;
        let current = self.owned_comment(article_id, comment_id).await?;

        let updated = self
            .comment_repo
            .update(&current.replaced_with(draft))
            .await
            .map_err(map_comment_repository_error)?
            .ok_or_else(|| comment_not_found(comment_id))?;

        info!(article_id, comment_id, "comment updated");
        Ok(CommentView::from(updated))
    }

    async fn delete_comment(&self, request: DeleteCommentRequest) -> Result<(), Error> {
        let DeleteCommentRequest {
            article_id,
            comment_id,
        } = request;
        self.owned_comment(article_id, comment_id).await?;

        let removed = self
            .comment_repo
            .delete(comment_id)
            .await
            .map_err(map_comment_repository_error)?;
        if !removed {
            return Err(comment_not_found(comment_id));
        }

        info!(article_id, comment_id, "comment deleted");
        Ok(())
    }
}

#[async_trait]
impl<C, A> CommentQuery for CommentService<C, A>
where
    C: CommentRepository,
    A: ArticleRepository,
{
    async fn list_comments(&self, request: ListCommentsRequest) -> Result<Vec<CommentView>, Error> {
        let article_id = request.article_id;
        self.require_article(article_id).await?;

        let comments = self
            .comment_repo
            .list_by_article(article_id)
            .await
            .map_err(map_comment_repository_error)?;

        Ok(comments.into_iter().map(CommentView::from).collect())
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
