//! HTTP inbound adapter exposing REST endpoints.

pub mod articles;
pub mod comments;
pub mod error;
pub mod health;
pub mod query_test;
pub mod schemas;
pub mod state;

pub use error::{ApiResult, configure_extractors};
