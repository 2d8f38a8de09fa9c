//! Article record manager.
//!
//! Implements the article driving ports on top of an [`ArticleRepository`].
//! Listing translates the client's one-based page number into the paging
//! abstraction's zero-based index and always sorts newest first.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Direction, Page, PageRequest, PageRequestError, Sort};
use serde_json::json;
use tracing::{error, info};

use crate::domain::ports::{
    ArticleCommand, ArticleQuery, ArticleRepository, ArticleRepositoryError, CreateArticleRequest,
    DeleteArticleRequest, GetArticleRequest, ListArticlesRequest, UpdateArticleRequest,
};
use crate::domain::{ArticleId, ArticleView, Error};

/// Property articles are ordered by when listed.
pub const ARTICLE_SORT_PROPERTY: &str = "id";

pub(crate) fn map_repository_error(error: ArticleRepositoryError) -> Error {
    error!(%error, "article repository failure");
    match error {
        ArticleRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("article repository unavailable: {message}"))
        }
        ArticleRepositoryError::Query { message } => {
            Error::internal(format!("article repository error: {message}"))
        }
    }
}

fn map_paging_error(error: PageRequestError) -> Error {
    let field = match error {
        PageRequestError::NegativePage { .. } => "page",
        PageRequestError::NonPositiveSize { .. } => "limit",
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": "invalid_paging",
    }))
}

/// Build the newest-first request for one-based `page` of `limit` articles.
fn newest_first_page(page: i64, limit: i64) -> Result<PageRequest, Error> {
    PageRequest::from_one_based(page, limit, Sort::by(ARTICLE_SORT_PROPERTY, Direction::Desc))
        .map_err(map_paging_error)
}

fn not_found(id: ArticleId) -> Error {
    Error::not_found(format!("article {id} not found"))
}

/// Article service implementing the command and query driving ports.
#[derive(Clone)]
pub struct ArticleService<R> {
    article_repo: Arc<R>,
}

impl<R> ArticleService<R> {
    /// Create a new service over the article repository.
    pub fn new(article_repo: Arc<R>) -> Self {
        Self { article_repo }
    }
}

#[async_trait]
impl<R> ArticleCommand for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn create_article(&self, request: CreateArticleRequest) -> Result<ArticleView, Error> {
        let article = self
            .article_repo
            .insert(&request.draft)
            .await
            .map_err(map_repository_error)?;

        info!(article_id = article.id(), "article created");
        Ok(ArticleView::from(article))
    }

    async fn update_article(&self, request: UpdateArticleRequest) -> Result<ArticleView, Error> {
        let UpdateArticleRequest { id, draft } = request;
        let current = self
            .article_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;

        let updated = self
            .article_repo
            .update(&current.replaced_with(draft))
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;

        info!(article_id = id, "article updated");
        Ok(ArticleView::from(updated))
    }

    async fn delete_article(&self, request: DeleteArticleRequest) -> Result<(), Error> {
        let id = request.id;
        if !self
            .article_repo
            .exists(id)
            .await
            .map_err(map_repository_error)?
        {
            return Err(not_found(id));
        }

        let removed = self
            .article_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(id));
        }

        info!(article_id = id, "article deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ArticleQuery for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn list_articles(
        &self,
        request: ListArticlesRequest,
    ) -> Result<Page<ArticleView>, Error> {
        let page_request = newest_first_page(request.page, request.limit)?;
        let page = self
            .article_repo
            .find_page(&page_request)
            .await
            .map_err(map_repository_error)?;

        Ok(page.map(ArticleView::from))
    }

    async fn get_article(&self, request: GetArticleRequest) -> Result<ArticleView, Error> {
        self.article_repo
            .find_by_id(request.id)
            .await
            .map_err(map_repository_error)?
            .map(ArticleView::from)
            .ok_or_else(|| not_found(request.id))
    }
}

#[cfg(test)]
#[path = "article_service_tests.rs"]
mod tests;
