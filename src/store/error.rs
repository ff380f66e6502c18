//! Data-access error types

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error for wrapping driver errors
pub type BoxedError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Pool could not be built or a connection could not be acquired
    #[error("connection failed: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Statement execution failure
    #[error("query failed: {message}: {source}")]
    Query {
        message: String,
        #[source]
        source: BoxedError,
    },

    /// Schema creation failure
    #[error("schema setup failed: {message}")]
    Schema {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Unique constraint hit, e.g. signing up twice for the same event
    #[error("{0} already exists")]
    Conflict(String),

    /// Foreign key constraint hit: the referenced user or event is missing
    #[error("{0}")]
    MissingReference(String),
}

impl StoreError {
    pub fn connection(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn schema(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Schema {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Classify a driver error raised while running `message`.
    ///
    /// Constraint violations become `Conflict` / `MissingReference` so the
    /// HTTP layer can answer 409 / 404 instead of 500.
    pub fn query(message: impl Into<String>, source: sqlx::Error) -> Self {
        let message = message.into();

        if let sqlx::Error::Database(db_err) = &source {
            if db_err.is_unique_violation() {
                return Self::Conflict("sign-up".to_string());
            }
            if db_err.is_foreign_key_violation() {
                return Self::MissingReference("Unknown user or event".to_string());
            }
        }

        match source {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::connection(message, source)
            }
            other => Self::Query {
                message,
                source: Box::new(other),
            },
        }
    }
}
