//! Tests for the article service.

use std::sync::Arc;

use mockall::predicate::eq;
use pagination::Page;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockArticleRepository;
use crate::domain::{Article, ArticleDraft, ErrorCode};

#[fixture]
fn draft() -> ArticleDraft {
    ArticleDraft {
        title: "Hello".to_owned(),
        content: "World".to_owned(),
        writer: "Alice".to_owned(),
    }
}

fn replacement() -> ArticleDraft {
    ArticleDraft {
        title: "Hi".to_owned(),
        content: "World!".to_owned(),
        writer: "Alice".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn create_returns_view_with_generated_id(draft: ArticleDraft) {
    let mut repo = MockArticleRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|draft| Ok(Article::new(1, draft.clone())));

    let service = ArticleService::new(Arc::new(repo));
    let view = service
        .create_article(CreateArticleRequest { draft })
        .await
        .expect("create succeeds");

    assert_eq!(view.id, 1);
    assert_eq!(view.title, "Hello");
}

#[rstest]
#[tokio::test]
async fn get_returns_not_found_when_missing() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id()
        .with(eq(42))
        .times(1)
        .return_once(|_| Ok(None));

    let service = ArticleService::new(Arc::new(repo));
    let error = service
        .get_article(GetArticleRequest { id: 42 })
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_replaces_every_field(draft: ArticleDraft) {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .return_once(move |_| Ok(Some(Article::new(1, draft))));
    repo.expect_update()
        .withf(|article| {
            article.id() == 1
                && article.title() == "Hi"
                && article.content() == "World!"
                && article.writer() == "Alice"
        })
        .times(1)
        .returning(|article| Ok(Some(article.clone())));

    let service = ArticleService::new(Arc::new(repo));
    let view = service
        .update_article(UpdateArticleRequest {
            id: 1,
            draft: replacement(),
        })
        .await
        .expect("update succeeds");

    assert_eq!(view.title, "Hi");
    assert_eq!(view.content, "World!");
}

#[rstest]
#[tokio::test]
async fn update_missing_article_skips_write() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));
    repo.expect_update().times(0);

    let service = ArticleService::new(Arc::new(repo));
    let error = service
        .update_article(UpdateArticleRequest {
            id: 9,
            draft: replacement(),
        })
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_missing_article_is_not_found() {
    let mut repo = MockArticleRepository::new();
    repo.expect_exists().with(eq(3)).return_once(|_| Ok(false));
    repo.expect_delete().times(0);

    let service = ArticleService::new(Arc::new(repo));
    let error = service
        .delete_article(DeleteArticleRequest { id: 3 })
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_existing_article_removes_row() {
    let mut repo = MockArticleRepository::new();
    repo.expect_exists().return_once(|_| Ok(true));
    repo.expect_delete().with(eq(3)).times(1).return_once(|_| Ok(true));

    let service = ArticleService::new(Arc::new(repo));
    service
        .delete_article(DeleteArticleRequest { id: 3 })
        .await
        .expect("delete succeeds");
}

#[rstest]
#[case(1, 20, 0)]
#[case(3, 5, 2)]
#[tokio::test]
async fn list_translates_one_based_pages(
    #[case] page: i64,
    #[case] limit: i64,
    #[case] expected_index: i64,
) {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_page()
        .withf(move |request| {
            request.index() == expected_index
                && request.size() == limit
                && request.sort().property() == ARTICLE_SORT_PROPERTY
                && request.sort().is_descending()
        })
        .times(1)
        .returning(|request| Ok(Page::new(Vec::new(), request.clone(), 0)));

    let service = ArticleService::new(Arc::new(repo));
    let listed = service
        .list_articles(ListArticlesRequest { page, limit })
        .await
        .expect("list succeeds");

    assert_eq!(listed.number(), page);
    assert_eq!(listed.size(), limit);
}

#[rstest]
#[tokio::test]
async fn list_maps_entities_to_views(draft: ArticleDraft) {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_page().returning(move |request| {
        Ok(Page::new(
            vec![
                Article::new(2, draft.clone()),
                Article::new(1, draft.clone()),
            ],
            request.clone(),
            2,
        ))
    });

    let service = ArticleService::new(Arc::new(repo));
    let page = service
        .list_articles(ListArticlesRequest { page: 1, limit: 20 })
        .await
        .expect("list succeeds");

    let ids: Vec<_> = page.content().iter().map(|view| view.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(page.total_elements(), 2);
}

#[rstest]
#[case(0, 20, "page")]
#[case(1, 0, "limit")]
#[case(-2, 10, "page")]
#[tokio::test]
async fn list_rejects_invalid_paging(
    #[case] page: i64,
    #[case] limit: i64,
    #[case] field: &str,
) {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_page().times(0);

    let service = ArticleService::new(Arc::new(repo));
    let error = service
        .list_articles(ListArticlesRequest { page, limit })
        .await
        .expect_err("invalid paging");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details");
    assert_eq!(details["field"], field);
}

#[rstest]
#[case(ArticleRepositoryError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
#[case(ArticleRepositoryError::query("syntax error"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_are_mapped(
    #[case] failure: ArticleRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().return_once(move |_| Err(failure));

    let service = ArticleService::new(Arc::new(repo));
    let error = service
        .get_article(GetArticleRequest { id: 1 })
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), expected);
}
