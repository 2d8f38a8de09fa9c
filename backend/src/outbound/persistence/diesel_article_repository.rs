//! PostgreSQL-backed `ArticleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{ArticleRepository, ArticleRepositoryError};
use crate::domain::{Article, ArticleDraft, ArticleId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ArticleRow, ArticleUpdate, NewArticleRow};
use super::pool::{DbPool, PoolError};
use super::schema::article;

/// Diesel-backed implementation of the article repository port.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ArticleRepositoryError {
    map_basic_pool_error(error, ArticleRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ArticleRepositoryError {
    map_basic_diesel_error(
        error,
        ArticleRepositoryError::query,
        ArticleRepositoryError::connection,
    )
}

fn unsupported_sort(property: &str) -> ArticleRepositoryError {
    ArticleRepositoryError::query(format!("unsupported article sort property: {property}"))
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ArticleRow = diesel::insert_into(article::table)
            .values(NewArticleRow::from(draft))
            .returning(ArticleRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ArticleRow> = article::table
            .filter(article::id.eq(id))
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Article::from))
    }

    async fn find_page(
        &self,
        request: &PageRequest,
    ) -> Result<Page<Article>, ArticleRepositoryError> {
        // Only the identity column is sortable.
        if request.sort().property() != "id" {
            return Err(unsupported_sort(request.sort().property()));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = article::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let query = article::table
            .select(ArticleRow::as_select())
            .offset(request.offset())
            .limit(request.size())
            .into_boxed();
        let query = if request.sort().is_descending() {
            query.order(article::id.desc())
        } else {
            query.order(article::id.asc())
        };
        let rows: Vec<ArticleRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        let content = rows.into_iter().map(Article::from).collect();
        Ok(Page::new(
            content,
            request.clone(),
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn exists(&self, id: ArticleId) -> Result<bool, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            article::table.filter(article::id.eq(id)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn update(&self, entity: &Article) -> Result<Option<Article>, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ArticleRow> = diesel::update(article::table.filter(article::id.eq(entity.id())))
            .set(ArticleUpdate::from(entity))
            .returning(ArticleRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Article::from))
    }

    async fn delete(&self, id: ArticleId) -> Result<bool, ArticleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(article::table.filter(article::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
