//! Driving port for article mutations.
//!
//! Inbound adapters use this port to create, replace and delete articles
//! without depending on repository details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ArticleDraft, ArticleId, ArticleView, Error};

/// Request to create an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub draft: ArticleDraft,
}

/// Request to replace every editable field of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    pub id: ArticleId,
    pub draft: ArticleDraft,
}

/// Request to delete an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteArticleRequest {
    pub id: ArticleId,
}

/// Driving port for article mutations.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), article_board::domain::Error> {
/// use std::sync::Arc;
///
/// use article_board::domain::{ArticleDraft, ArticleService};
/// use article_board::domain::ports::{ArticleCommand, CreateArticleRequest};
/// use article_board::outbound::memory::InMemoryStore;
///
/// let service = ArticleService::new(Arc::new(InMemoryStore::default()));
/// let view = service
///     .create_article(CreateArticleRequest {
///         draft: ArticleDraft {
///             title: "Hello".into(),
///             content: "World".into(),
///             writer: "Alice".into(),
///         },
///     })
///     .await?;
/// assert_eq!(view.title, "Hello");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleCommand: Send + Sync {
    /// Persist a new article and return its view.
    async fn create_article(&self, request: CreateArticleRequest) -> Result<ArticleView, Error>;

    /// Replace an article's title, content and writer.
    ///
    /// Fails with `NotFound` when the article does not exist.
    async fn update_article(&self, request: UpdateArticleRequest) -> Result<ArticleView, Error>;

    /// Delete an article.
    ///
    /// Fails with `NotFound` when the article does not exist.
    async fn delete_article(&self, request: DeleteArticleRequest) -> Result<(), Error>;
}
