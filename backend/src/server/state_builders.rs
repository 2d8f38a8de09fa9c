//! Builders wiring repositories into services and HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use article_board::domain::ports::{ArticleRepository, CommentRepository};
use article_board::domain::{ArticleService, CommentService};
use article_board::inbound::http::state::{HttpState, HttpStatePorts};
use article_board::outbound::memory::InMemoryStore;
use article_board::outbound::persistence::{DieselArticleRepository, DieselCommentRepository};

use super::ServerConfig;

/// Run both services over one pair of repositories.
///
/// The comment service reuses `articles` to check that parents exist.
fn ports_over<A, C>(articles: Arc<A>, comments: Arc<C>) -> HttpStatePorts
where
    A: ArticleRepository + 'static,
    C: CommentRepository + 'static,
{
    HttpStatePorts::from_services(
        Arc::new(ArticleService::new(articles.clone())),
        Arc::new(CommentService::new(comments, articles)),
    )
}

/// Build the shared HTTP state over PostgreSQL when a pool is configured,
/// otherwise over a fresh [`InMemoryStore`].
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = match config.db_pool.as_ref() {
        Some(pool) => ports_over(
            Arc::new(DieselArticleRepository::new(pool.clone())),
            Arc::new(DieselCommentRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database pool configured; records are kept in memory");
            let store = Arc::new(InMemoryStore::default());
            ports_over(store.clone(), store)
        }
    };
    web::Data::new(HttpState::new(ports))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;
    use article_board::domain::ports::{
        CreateArticleRequest, CreateCommentRequest, GetArticleRequest, ListCommentsRequest,
    };
    use article_board::domain::{ArticleDraft, CommentDraft, ErrorCode};
    use rstest::{fixture, rstest};

    #[fixture]
    fn article_draft() -> ArticleDraft {
        ArticleDraft {
            title: "Hello".to_owned(),
            content: "World".to_owned(),
            writer: "Alice".to_owned(),
        }
    }

    fn comment_draft() -> CommentDraft {
        CommentDraft {
            content: "Nice post".to_owned(),
            writer: "Bob".to_owned(),
        }
    }

    fn unpooled_state() -> web::Data<HttpState> {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("literal");
        build_http_state(&ServerConfig::new(addr))
    }

    #[rstest]
    #[tokio::test]
    async fn unpooled_state_reads_back_created_articles(article_draft: ArticleDraft) {
        let state = unpooled_state();

        let created = state
            .articles
            .create_article(CreateArticleRequest {
                draft: article_draft,
            })
            .await
            .expect("create succeeds");
        let fetched = state
            .articles_query
            .get_article(GetArticleRequest { id: created.id })
            .await
            .expect("article is readable through the query port");

        assert_eq!(fetched, created);
    }

    #[rstest]
    #[tokio::test]
    async fn unpooled_state_rejects_comments_on_missing_articles() {
        let state = unpooled_state();

        let error = state
            .comments
            .create_comment(CreateCommentRequest {
                article_id: 42,
                draft: comment_draft(),
            })
            .await
            .expect_err("article 42 does not exist");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn comment_service_shares_the_article_store(article_draft: ArticleDraft) {
        let store = Arc::new(InMemoryStore::default());
        let ports = ports_over(store.clone(), store.clone());

        let article = ports
            .articles
            .create_article(CreateArticleRequest {
                draft: article_draft,
            })
            .await
            .expect("create article");
        ports
            .comments
            .create_comment(CreateCommentRequest {
                article_id: article.id,
                draft: comment_draft(),
            })
            .await
            .expect("create comment");

        let listed = ports
            .comments_query
            .list_comments(ListCommentsRequest {
                article_id: article.id,
            })
            .await
            .expect("list comments");
        assert_eq!(listed.len(), 1);
        assert_eq!(store.comment_count(), 1);
    }
}
