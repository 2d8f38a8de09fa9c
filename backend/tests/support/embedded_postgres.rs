//! Embedded PostgreSQL provisioning for repository integration tests.
//!
//! Suites only touch a real cluster when `RUN_PG_EMBEDDED` is truthy. When
//! provisioning fails, `SKIP_TEST_CLUSTER` decides between skipping and
//! failing loudly so CI breakage is not masked.

use article_board::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use tokio::runtime::Runtime;

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Migrated temporary database with a pool and runtime bound to it.
///
/// Fields drop in order: the pool closes its connections before the runtime
/// stops, and the database is dropped last.
pub struct Provisioned {
    pub pool: DbPool,
    pub runtime: Runtime,
    _database: TemporaryDatabase,
}

fn provision_inner() -> Result<Provisioned, String> {
    let cluster = shared_cluster_handle().map_err(|err| format!("cluster: {err:?}"))?;
    let database = cluster
        .temporary_database(format!("test_{}", uuid::Uuid::new_v4().simple()))
        .map_err(|err| format!("temporary database: {err:?}"))?;
    let url = database.url().to_owned();
    let runtime = Runtime::new().map_err(|err| format!("runtime: {err}"))?;

    runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(
            PoolConfig::new(url).with_max_size(2).with_min_idle(Some(1)),
        ))
        .map_err(|err| err.to_string())?;

    Ok(Provisioned {
        pool,
        runtime,
        _database: database,
    })
}

/// Provision a migrated database, or `None` when the suite should skip.
///
/// # Panics
/// Panics when provisioning fails and `SKIP_TEST_CLUSTER` is not set.
pub fn provision() -> Option<Provisioned> {
    if !env_flag("RUN_PG_EMBEDDED") {
        eprintln!("SKIP-TEST-CLUSTER: RUN_PG_EMBEDDED is not set");
        return None;
    }
    match provision_inner() {
        Ok(provisioned) => Some(provisioned),
        Err(reason) if env_flag("SKIP_TEST_CLUSTER") => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.")
        }
    }
}
