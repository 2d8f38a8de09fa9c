//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from storage.
//! Driving ports (`*Command`, `*Query`) are the use-cases inbound adapters
//! call. Services in `crate::domain` implement the driving ports over any
//! pair of repositories.

mod macros;
pub(crate) use macros::define_port_error;

mod article_command;
mod article_query;
mod article_repository;
mod comment_command;
mod comment_query;
mod comment_repository;

#[cfg(test)]
pub use article_command::MockArticleCommand;
pub use article_command::{
    ArticleCommand, CreateArticleRequest, DeleteArticleRequest, UpdateArticleRequest,
};
#[cfg(test)]
pub use article_query::MockArticleQuery;
pub use article_query::{ArticleQuery, GetArticleRequest, ListArticlesRequest};
#[cfg(test)]
pub use article_repository::MockArticleRepository;
pub use article_repository::{ArticleRepository, ArticleRepositoryError};
#[cfg(test)]
pub use comment_command::MockCommentCommand;
pub use comment_command::{
    CommentCommand, CreateCommentRequest, DeleteCommentRequest, UpdateCommentRequest,
};
#[cfg(test)]
pub use comment_query::MockCommentQuery;
pub use comment_query::{CommentQuery, ListCommentsRequest};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
