use super::{Store, StoreError};
use crate::models::event::{Event, EventFilter, EventWithCount, NewEvent};

const EVENTS_WITH_COUNT: &str = r#"
    SELECT e.eid, e.event_date, e.event_time, e.location, COUNT(s.uid) AS count
    FROM events e
    LEFT JOIN sign_ups s ON s.eid = e.eid
"#;

// Dates and times are fixed-width text, so string order is chronological
const AT_OR_AFTER: &str = "(e.event_date > ?1 OR (e.event_date = ?1 AND e.event_time >= ?2))";

impl Store {
    /// Events matching every filter that is set
    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT eid, event_date, event_time, location
            FROM events
            WHERE (?1 IS NULL OR event_date = ?1)
              AND (?2 IS NULL OR event_time = ?2)
              AND (?3 IS NULL OR location = ?3)
            ORDER BY event_date, event_time, eid
            "#,
        )
        .bind(filter.date.as_deref())
        .bind(filter.time.as_deref())
        .bind(filter.location.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to list events", e))
    }

    pub async fn insert_event(&self, event: &NewEvent) -> Result<Event, StoreError> {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (event_date, event_time, location)
            VALUES (?1, ?2, ?3)
            RETURNING eid, event_date, event_time, location
            "#,
        )
        .bind(&event.event_date)
        .bind(&event.event_time)
        .bind(&event.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to insert event", e))
    }

    /// Split events around a moment: upcoming (soonest first) and past
    /// (most recent first), each with its sign-up count.
    pub async fn events_around(
        &self,
        date: &str,
        time: &str,
    ) -> Result<(Vec<EventWithCount>, Vec<EventWithCount>), StoreError> {
        let upcoming_sql = format!(
            "{} WHERE {} GROUP BY e.eid ORDER BY e.event_date ASC, e.event_time ASC, e.eid ASC",
            EVENTS_WITH_COUNT, AT_OR_AFTER
        );
        let past_sql = format!(
            "{} WHERE NOT {} GROUP BY e.eid ORDER BY e.event_date DESC, e.event_time DESC, e.eid DESC",
            EVENTS_WITH_COUNT, AT_OR_AFTER
        );

        let upcoming = sqlx::query_as::<_, EventWithCount>(&upcoming_sql)
            .bind(date)
            .bind(time)
            .fetch_all(&self.pool);
        let past = sqlx::query_as::<_, EventWithCount>(&past_sql)
            .bind(date)
            .bind(time)
            .fetch_all(&self.pool);

        tokio::try_join!(upcoming, past)
            .map_err(|e| StoreError::query("failed to list upcoming and past events", e))
    }

    /// Returns false when no event had this eid
    pub async fn delete_event(&self, eid: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE eid = ?1")
            .bind(eid)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::query("failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }
}
