//! Comment HTTP handlers, nested under their parent article.
//!
//! ```text
//! POST   /articles/{articleId}/comments
//! GET    /articles/{articleId}/comments
//! PUT    /articles/{articleId}/comments/{commentId}
//! DELETE /articles/{articleId}/comments/{commentId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateCommentRequest, DeleteCommentRequest, ListCommentsRequest, UpdateCommentRequest,
};
use crate::domain::{ArticleId, CommentDraft, CommentId, CommentView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CommentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request payload for creating or editing a comment.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CommentRequestBody {
    #[schema(example = "Nice post")]
    pub content: String,
    #[schema(example = "Bob")]
    pub writer: String,
}

impl From<CommentRequestBody> for CommentDraft {
    fn from(body: CommentRequestBody) -> Self {
        Self {
            content: body.content,
            writer: body.writer,
        }
    }
}

/// Add a comment to an article.
#[utoipa::path(
    post,
    path = "/articles/{articleId}/comments",
    params(("articleId" = i64, Path, description = "Parent article identifier")),
    request_body = CommentRequestBody,
    responses(
        (status = 200, description = "Comment created", body = CommentSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Article not found"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "createComment"
)]
#[post("/articles/{article_id}/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    path: web::Path<ArticleId>,
    payload: web::Json<CommentRequestBody>,
) -> ApiResult<web::Json<CommentView>> {
    let view = state
        .comments
        .create_comment(CreateCommentRequest {
            article_id: path.into_inner(),
            draft: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(view))
}

/// List every comment of an article.
#[utoipa::path(
    get,
    path = "/articles/{articleId}/comments",
    params(("articleId" = i64, Path, description = "Parent article identifier")),
    responses(
        (status = 200, description = "Comments of the article", body = [CommentSchema]),
        (status = 404, description = "Article not found"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/articles/{article_id}/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    path: web::Path<ArticleId>,
) -> ApiResult<web::Json<Vec<CommentView>>> {
    let views = state
        .comments_query
        .list_comments(ListCommentsRequest {
            article_id: path.into_inner(),
        })
        .await?;
    Ok(web::Json(views))
}

/// Edit a comment of the addressed article.
#[utoipa::path(
    put,
    path = "/articles/{articleId}/comments/{commentId}",
    params(
        ("articleId" = i64, Path, description = "Parent article identifier"),
        ("commentId" = i64, Path, description = "Comment identifier")
    ),
    request_body = CommentRequestBody,
    responses(
        (status = 200, description = "Comment updated", body = CommentSchema),
        (status = 400, description = "Comment belongs to another article", body = ErrorSchema),
        (status = 404, description = "Comment not found"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "updateComment"
)]
#[put("/articles/{article_id}/comments/{comment_id}")]
pub async fn update_comment(
    state: web::Data<HttpState>,
    path: web::Path<(ArticleId, CommentId)>,
    payload: web::Json<CommentRequestBody>,
) -> ApiResult<web::Json<CommentView>> {
    let (article_id, comment_id) = path.into_inner();
    let view = state
        .comments
        .update_comment(UpdateCommentRequest {
            article_id,
            comment_id,
            draft: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(view))
}

/// Delete a comment of the addressed article.
#[utoipa::path(
    delete,
    path = "/articles/{articleId}/comments/{commentId}",
    params(
        ("articleId" = i64, Path, description = "Parent article identifier"),
        ("commentId" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 400, description = "Comment belongs to another article", body = ErrorSchema),
        (status = 404, description = "Comment not found"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
#[delete("/articles/{article_id}/comments/{comment_id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<(ArticleId, CommentId)>,
) -> ApiResult<HttpResponse> {
    let (article_id, comment_id) = path.into_inner();
    state
        .comments
        .delete_comment(DeleteCommentRequest {
            article_id,
            comment_id,
        })
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
