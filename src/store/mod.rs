//! SQLite data-access layer using sqlx
//!
//! One async function per API operation, each a single statement against
//! the pool. Every user-supplied value goes through `bind()`; the only text
//! spliced into SQL is the sort column and direction for `list_users`, and
//! those come from closed enums.
//!
//! # Connection Management
//!
//! The pool is built with `connect_lazy_with`, so no connection is opened
//! until the first query (normally `initialize`). It lives for the whole
//! process and must be shut down with [`Store::close`].

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::core::config::DatabaseConfig;

pub mod error;
mod events;
mod schema;
mod sign_ups;
mod users;

pub use error::StoreError;

#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Build a lazily connecting pool for the configured database.
    ///
    /// `:memory:` is pinned to a single connection that never expires,
    /// otherwise each connection would see its own empty database.
    pub fn new(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let in_memory = config.path == ":memory:";

        let options = if in_memory {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| StoreError::connection("invalid SQLite URL", e))?
        } else {
            SqliteConnectOptions::new()
                .filename(&config.path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
        }
        .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

        pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(config.max_connections)
                .idle_timeout(Duration::from_secs(600))
        };

        Ok(Self {
            pool: pool_options.connect_lazy_with(options),
        })
    }

    /// Create tables if they do not exist yet
    pub async fn initialize(&self) -> Result<(), StoreError> {
        schema::create_tables(&self.pool).await
    }

    /// Close every pooled connection; later queries fail with a connection error
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// A store backed by a fresh SQLite file.
    ///
    /// Keep the returned `TempDir` alive for as long as the store is used.
    pub async fn temp_store() -> (Store, TempDir) {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("test.db").to_string_lossy().into_owned(),
            max_connections: 2,
            acquire_timeout_secs: 5,
        };
        let store = Store::new(&config).unwrap();
        store.initialize().await.unwrap();
        (store, dir)
    }
}
