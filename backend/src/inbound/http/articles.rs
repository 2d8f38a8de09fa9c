//! Article HTTP handlers.
//!
//! ```text
//! POST   /articles
//! GET    /articles?page=1&limit=20
//! GET    /articles/{id}
//! PUT    /articles/{id}
//! DELETE /articles/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::PageEnvelope;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateArticleRequest, DeleteArticleRequest, GetArticleRequest, ListArticlesRequest,
    UpdateArticleRequest,
};
use crate::domain::{ArticleDraft, ArticleId, ArticleView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ArticlePageSchema, ArticleSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 20;

/// Request payload for creating or replacing an article.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ArticleRequestBody {
    #[schema(example = "Hello")]
    pub title: String,
    #[schema(example = "World")]
    pub content: String,
    #[schema(example = "Alice")]
    pub writer: String,
}

impl From<ArticleRequestBody> for ArticleDraft {
    fn from(body: ArticleRequestBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            writer: body.writer,
        }
    }
}

/// Paging parameters for the article listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListArticlesQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Create an article.
#[utoipa::path(
    post,
    path = "/articles",
    request_body = ArticleRequestBody,
    responses(
        (status = 200, description = "Article created", body = ArticleSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "createArticle"
)]
#[post("/articles")]
pub async fn create_article(
    state: web::Data<HttpState>,
    payload: web::Json<ArticleRequestBody>,
) -> ApiResult<web::Json<ArticleView>> {
    let view = state
        .articles
        .create_article(CreateArticleRequest {
            draft: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(view))
}

/// List articles newest first.
///
/// `page` is one-based. The envelope links reuse the request URL, so they
/// point back at whichever host and scheme the client used.
#[utoipa::path(
    get,
    path = "/articles",
    params(
        ("page" = Option<i64>, Query, description = "One-based page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Page size, default 20")
    ),
    responses(
        (status = 200, description = "Page of articles", body = ArticlePageSchema),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "listArticles"
)]
#[get("/articles")]
pub async fn list_articles(
    state: web::Data<HttpState>,
    request: HttpRequest,
    query: web::Query<ListArticlesQuery>,
) -> ApiResult<web::Json<PageEnvelope<ArticleView>>> {
    let ListArticlesQuery { page, limit } = query.into_inner();
    let listed = state
        .articles_query
        .list_articles(ListArticlesRequest { page, limit })
        .await?;

    let base = request.full_url();
    Ok(web::Json(PageEnvelope::from_page(listed, &base)))
}

/// Fetch one article.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article", body = ArticleSchema),
        (status = 404, description = "Article not found"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "getArticle"
)]
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticleId>,
) -> ApiResult<web::Json<ArticleView>> {
    let view = state
        .articles_query
        .get_article(GetArticleRequest {
            id: path.into_inner(),
        })
        .await?;
    Ok(web::Json(view))
}

/// Replace every field of an article.
#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequestBody,
    responses(
        (status = 200, description = "Article updated", body = ArticleSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Article not found"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "updateArticle"
)]
#[put("/articles/{id}")]
pub async fn update_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticleId>,
    payload: web::Json<ArticleRequestBody>,
) -> ApiResult<web::Json<ArticleView>> {
    let view = state
        .articles
        .update_article(UpdateArticleRequest {
            id: path.into_inner(),
            draft: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(view))
}

/// Delete an article. Comments are not removed with it.
#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted"),
        (status = 404, description = "Article not found"),
        (status = 500, description = "Article still has comments", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "deleteArticle"
)]
#[delete("/articles/{id}")]
pub async fn delete_article(
    state: web::Data<HttpState>,
    path: web::Path<ArticleId>,
) -> ApiResult<HttpResponse> {
    state
        .articles
        .delete_article(DeleteArticleRequest {
            id: path.into_inner(),
        })
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "articles_tests.rs"]
mod tests;
