//! Article board backend.
//!
//! A hexagonal CRUD service: [`domain`] holds entities, ports and services,
//! [`inbound`] adapts HTTP onto the driving ports, and [`outbound`] implements
//! the repository ports over PostgreSQL or process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
