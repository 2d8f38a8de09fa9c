//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel row structs and domain entities and
//! carry no business rules. Row models (`models.rs`) and table definitions
//! (`schema.rs`) stay private to this module. Connections come from a `bb8`
//! pool through `diesel-async`.
//!
//! ```ignore
//! use article_board::outbound::persistence::{
//!     DbPool, DieselArticleRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! run_pending_migrations(database_url).await?;
//! let pool = DbPool::new(PoolConfig::new(database_url)).await?;
//! let articles = DieselArticleRepository::new(pool);
//! ```

mod diesel_article_repository;
mod diesel_basic_error_mapping;
mod diesel_comment_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
