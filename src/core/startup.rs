use anyhow::{Context, Result};
use tracing::info;

use crate::core::config::DatabaseConfig;
use crate::store::Store;

/// Build the pool and make sure the schema exists.
///
/// The pool connects lazily; `initialize` is the first statement to run, so
/// an unreachable database fails startup here rather than on the first request.
pub async fn open_store(config: &DatabaseConfig) -> Result<Store> {
    let store = Store::new(config).context("Failed to configure database pool")?;

    store
        .initialize()
        .await
        .context(format!("Failed to initialize database at '{}'", config.path))?;

    info!(
        path = %config.path,
        max_connections = config.max_connections,
        "Database ready"
    );

    Ok(store)
}
