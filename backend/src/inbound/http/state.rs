//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and depend only on
//! the driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ArticleCommand, ArticleQuery, CommentCommand, CommentQuery};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub articles: Arc<dyn ArticleCommand>,
    pub articles_query: Arc<dyn ArticleQuery>,
    pub comments: Arc<dyn CommentCommand>,
    pub comments_query: Arc<dyn CommentQuery>,
}

impl HttpStatePorts {
    /// Expose one article service and one comment service through all four
    /// ports.
    pub fn from_services<A, C>(articles: Arc<A>, comments: Arc<C>) -> Self
    where
        A: ArticleCommand + ArticleQuery + 'static,
        C: CommentCommand + CommentQuery + 'static,
    {
        Self {
            articles: articles.clone(),
            articles_query: articles,
            comments: comments.clone(),
            comments_query: comments,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<dyn ArticleCommand>,
    pub articles_query: Arc<dyn ArticleQuery>,
    pub comments: Arc<dyn CommentCommand>,
    pub comments_query: Arc<dyn CommentQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use article_board::domain::{ArticleService, CommentService};
    /// use article_board::inbound::http::state::{HttpState, HttpStatePorts};
    /// use article_board::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let state = HttpState::new(HttpStatePorts::from_services(
    ///     Arc::new(ArticleService::new(store.clone())),
    ///     Arc::new(CommentService::new(store.clone(), store)),
    /// ));
    /// let _articles = state.articles.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            articles,
            articles_query,
            comments,
            comments_query,
        } = ports;
        Self {
            articles,
            articles_query,
            comments,
            comments_query,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
