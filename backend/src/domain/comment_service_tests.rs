//! Tests for the comment service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{ArticleRepositoryError, MockArticleRepository, MockCommentRepository};
use crate::domain::{CommentDraft, ErrorCode};

#[fixture]
fn draft() -> CommentDraft {
    CommentDraft {
        content: "Nice post".to_owned(),
        writer: "Bob".to_owned(),
    }
}

fn edited() -> CommentDraft {
    CommentDraft {
        content: "Edited".to_owned(),
        writer: "Bob".to_owned(),
    }
}

fn service(
    comments: MockCommentRepository,
    articles: MockArticleRepository,
) -> CommentService<MockCommentRepository, MockArticleRepository> {
    CommentService::new(Arc::new(comments), Arc::new(articles))
}

fn articles_existing(exists: bool) -> MockArticleRepository {
    let mut articles = MockArticleRepository::new();
    articles.expect_exists().returning(move |_| Ok(exists));
    articles
}

fn comment_lookup(comment: Comment) -> MockCommentRepository {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_by_id()
        .with(eq(comment.id()))
        .return_once(move |_| Ok(Some(comment)));
    comments
}

#[rstest]
#[tokio::test]
async fn create_binds_comment_to_article(draft: CommentDraft) {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_insert()
        .withf(|article_id, draft| *article_id == 1 && draft.content == "Nice post")
        .times(1)
        .returning(|article_id, draft| Ok(Comment::new(10, article_id, draft.clone())));

    let view = service(comments, articles_existing(true))
        .create_comment(CreateCommentRequest {
            article_id: 1,
            draft,
        })
        .await
        .expect("create succeeds");

    assert_eq!(view.id, 10);
    assert_eq!(view.writer, "Bob");
}

#[rstest]
#[tokio::test]
async fn create_under_missing_article_persists_nothing(draft: CommentDraft) {
    let mut comments = MockCommentRepository::new();
    comments.expect_insert().times(0);

    let error = service(comments, articles_existing(false))
        .create_comment(CreateCommentRequest {
            article_id: 99,
            draft,
        })
        .await
        .expect_err("article missing");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert!(error.message().contains("article 99"));
}

#[rstest]
#[tokio::test]
async fn list_requires_existing_article() {
    let mut comments = MockCommentRepository::new();
    comments.expect_list_by_article().times(0);

    let error = service(comments, articles_existing(false))
        .list_comments(ListCommentsRequest { article_id: 4 })
        .await
        .expect_err("article missing");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn list_preserves_store_order(draft: CommentDraft) {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_list_by_article()
        .with(eq(1))
        .return_once(move |_| {
            Ok(vec![
                Comment::new(12, 1, draft.clone()),
                Comment::new(10, 1, draft.clone()),
                Comment::new(11, 1, draft),
            ])
        });

    let views = service(comments, articles_existing(true))
        .list_comments(ListCommentsRequest { article_id: 1 })
        .await
        .expect("list succeeds");

    let ids: Vec<_> = views.iter().map(|view| view.id).collect();
    assert_eq!(ids, vec![12, 10, 11]);
}

#[rstest]
#[tokio::test]
async fn update_rewrites_owned_comment(draft: CommentDraft) {
    let mut comments = comment_lookup(Comment::new(10, 1, draft));
    comments
        .expect_update()
        .withf(|comment| {
            comment.id() == 10 && comment.article_id() == 1 && comment.content() == "Edited"
        })
        .times(1)
        .returning(|comment| Ok(Some(comment.clone())));

    let view = service(comments, MockArticleRepository::new())
        .update_comment(UpdateCommentRequest {
            article_id: 1,
            comment_id: 10,
            draft: edited(),
        })
        .await
        .expect("update succeeds");

    assert_eq!(view.id, 10);
    assert_eq!(view.content, "Edited");
}

#[rstest]
#[tokio::test]
async fn update_through_other_article_is_rejected(draft: CommentDraft) {
    let mut comments = comment_lookup(Comment::new(10, 1, draft));
    comments.expect_update().times(0);

    let error = service(comments, MockArticleRepository::new())
        .update_comment(UpdateCommentRequest {
            article_id: 2,
            comment_id: 10,
            draft: edited(),
        })
        .await
        .expect_err("ownership mismatch");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details");
    assert_eq!(details["articleId"], 2);
    assert_eq!(details["commentId"], 10);
}

#[rstest]
#[tokio::test]
async fn update_missing_comment_is_not_found() {
    let mut comments = MockCommentRepository::new();
    comments.expect_find_by_id().return_once(|_| Ok(None));
    comments.expect_update().times(0);

    let error = service(comments, MockArticleRepository::new())
        .update_comment(UpdateCommentRequest {
            article_id: 1,
            comment_id: 77,
            draft: edited(),
        })
        .await
        .expect_err("comment missing");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert!(error.message().contains("comment 77"));
}

#[rstest]
#[tokio::test]
async fn delete_through_other_article_is_rejected(draft: CommentDraft) {
    let mut comments = comment_lookup(Comment::new(10, 1, draft));
    comments.expect_delete().times(0);

    let error = service(comments, MockArticleRepository::new())
        .delete_comment(DeleteCommentRequest {
            article_id: 3,
            comment_id: 10,
        })
        .await
        .expect_err("ownership mismatch");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn delete_owned_comment_removes_row(draft: CommentDraft) {
    let mut comments = comment_lookup(Comment::new(10, 1, draft));
    comments
        .expect_delete()
        .with(eq(10))
        .times(1)
        .return_once(|_| Ok(true));

    service(comments, MockArticleRepository::new())
        .delete_comment(DeleteCommentRequest {
            article_id: 1,
            comment_id: 10,
        })
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn delete_racing_removal_is_not_found(draft: CommentDraft) {
    let mut comments = comment_lookup(Comment::new(10, 1, draft));
    comments.expect_delete().return_once(|_| Ok(false));

    let error = service(comments, MockArticleRepository::new())
        .delete_comment(DeleteCommentRequest {
            article_id: 1,
            comment_id: 10,
        })
        .await
        .expect_err("row vanished");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(CommentRepositoryError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
#[case(CommentRepositoryError::query("constraint"), ErrorCode::InternalError)]
#[tokio::test]
async fn comment_store_failures_are_mapped(
    #[case] failure: CommentRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_list_by_article()
        .return_once(move |_| Err(failure));

    let error = service(comments, articles_existing(true))
        .list_comments(ListCommentsRequest { article_id: 1 })
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn article_lookup_failure_is_mapped(draft: CommentDraft) {
    let mut articles = MockArticleRepository::new();
    articles
        .expect_exists()
        .return_once(|_| Err(ArticleRepositoryError::connection("refused")));
    let mut comments = MockCommentRepository::new();
    comments.expect_insert().times(0);

    let error = service(comments, articles)
        .create_comment(CreateCommentRequest {
            article_id: 1,
            draft,
        })
        .await
        .expect_err("article lookup failure");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
