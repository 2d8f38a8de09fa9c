//! Port for article persistence.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Article, ArticleDraft, ArticleId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by article repository adapters.
    pub enum ArticleRepositoryError {
        /// Repository connection could not be established.
        Connection { message } =>
            "article repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message } =>
            "article repository query failed: {message}",
    }
}

/// Port for storing and reading articles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Persist a new article and return it with its generated identifier.
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, ArticleRepositoryError>;

    /// Find an article by identifier.
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError>;

    /// Load one sorted page of articles plus the total article count.
    async fn find_page(&self, request: &PageRequest)
    -> Result<Page<Article>, ArticleRepositoryError>;

    /// Report whether an article with `id` exists.
    async fn exists(&self, id: ArticleId) -> Result<bool, ArticleRepositoryError>;

    /// Overwrite the stored fields of `article`.
    ///
    /// Returns `None` when no row carries the article's identifier.
    async fn update(&self, article: &Article) -> Result<Option<Article>, ArticleRepositoryError>;

    /// Remove the article with `id`, returning whether a row was deleted.
    async fn delete(&self, id: ArticleId) -> Result<bool, ArticleRepositoryError>;
}
