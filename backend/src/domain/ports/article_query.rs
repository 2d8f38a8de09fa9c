//! Driving port for article reads.

use async_trait::async_trait;
use pagination::Page;
use serde::{Deserialize, Serialize};

use crate::domain::{ArticleId, ArticleView, Error};

/// Request for one page of articles.
///
/// `page` is one-based as seen by clients; `limit` bounds the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListArticlesRequest {
    pub page: i64,
    pub limit: i64,
}

/// Request for a single article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetArticleRequest {
    pub id: ArticleId,
}

/// Driving port for article reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleQuery: Send + Sync {
    /// List articles newest first.
    ///
    /// Fails with `InvalidRequest` when `page` or `limit` is below one.
    async fn list_articles(&self, request: ListArticlesRequest)
    -> Result<Page<ArticleView>, Error>;

    /// Fetch one article, failing with `NotFound` when it does not exist.
    async fn get_article(&self, request: GetArticleRequest) -> Result<ArticleView, Error>;
}
