//! Table definitions
//!
//! Sign-ups reference users and events with `ON DELETE CASCADE`, so removing
//! a user or event also removes their sign-ups. Foreign keys are switched on
//! per connection in `Store::new`.

use sqlx::SqlitePool;

use super::StoreError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        uid           INTEGER PRIMARY KEY AUTOINCREMENT,
        fname         TEXT    NOT NULL,
        lname         TEXT    NOT NULL,
        user_level    INTEGER NOT NULL,
        password_hash TEXT    NOT NULL,
        noshow_count  INTEGER NOT NULL DEFAULT 0
    )
"#;

const CREATE_EVENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        eid        INTEGER PRIMARY KEY AUTOINCREMENT,
        event_date TEXT NOT NULL,
        event_time TEXT NOT NULL,
        location   TEXT NOT NULL
    )
"#;

const CREATE_SIGN_UPS: &str = r#"
    CREATE TABLE IF NOT EXISTS sign_ups (
        uid        INTEGER NOT NULL REFERENCES users(uid) ON DELETE CASCADE,
        eid        INTEGER NOT NULL REFERENCES events(eid) ON DELETE CASCADE,
        attendance BOOLEAN NOT NULL DEFAULT FALSE,
        PRIMARY KEY (uid, eid)
    )
"#;

const CREATE_SIGN_UPS_EID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_sign_ups_eid ON sign_ups(eid)";

pub(super) async fn create_tables(pool: &SqlitePool) -> Result<(), StoreError> {
    for (name, statement) in [
        ("users", CREATE_USERS),
        ("events", CREATE_EVENTS),
        ("sign_ups", CREATE_SIGN_UPS),
        ("idx_sign_ups_eid", CREATE_SIGN_UPS_EID_INDEX),
    ] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                    StoreError::connection("failed to reach database", e)
                }
                other => StoreError::schema(format!("failed to create {}", name), other),
            })?;
    }

    Ok(())
}
