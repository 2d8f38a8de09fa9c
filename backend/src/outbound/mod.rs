//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! `persistence` stores articles and comments in PostgreSQL; `memory` keeps
//! them in process when no database is configured. Adapters translate
//! between domain entities and storage rows and hold no business logic.

pub mod memory;
pub mod persistence;
