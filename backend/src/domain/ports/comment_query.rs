//! Driving port for comment reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ArticleId, CommentView, Error};

/// Request for every comment of one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCommentsRequest {
    pub article_id: ArticleId,
}

/// Driving port for comment reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// List an article's comments, failing with `NotFound` when the article
    /// does not exist.
    async fn list_comments(&self, request: ListCommentsRequest) -> Result<Vec<CommentView>, Error>;
}
