use super::{Store, StoreError};
use crate::models::sign_up::SignUp;

impl Store {
    /// Sign-ups filtered by user and/or event; 0 matches any id
    pub async fn list_sign_ups(&self, uid: i64, eid: i64) -> Result<Vec<SignUp>, StoreError> {
        sqlx::query_as::<_, SignUp>(
            r#"
            SELECT uid, eid, attendance
            FROM sign_ups
            WHERE (?1 = 0 OR uid = ?1)
              AND (?2 = 0 OR eid = ?2)
            ORDER BY eid, uid
            "#,
        )
        .bind(uid)
        .bind(eid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to list sign-ups", e))
    }

    /// Fails with `MissingReference` if the user or event does not exist and
    /// with `Conflict` if the user is already signed up.
    pub async fn insert_sign_up(&self, uid: i64, eid: i64) -> Result<SignUp, StoreError> {
        sqlx::query_as::<_, SignUp>(
            r#"
            INSERT INTO sign_ups (uid, eid, attendance)
            VALUES (?1, ?2, FALSE)
            RETURNING uid, eid, attendance
            "#,
        )
        .bind(uid)
        .bind(eid)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to insert sign-up", e))
    }

    /// `None` when the user is not signed up for the event
    pub async fn set_attendance(
        &self,
        uid: i64,
        eid: i64,
        attendance: bool,
    ) -> Result<Option<SignUp>, StoreError> {
        sqlx::query_as::<_, SignUp>(
            r#"
            UPDATE sign_ups SET attendance = ?3
            WHERE uid = ?1 AND eid = ?2
            RETURNING uid, eid, attendance
            "#,
        )
        .bind(uid)
        .bind(eid)
        .bind(attendance)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to update attendance", e))
    }

    /// Bump `noshow_count` for every user signed up for `eid` whose
    /// attendance is still false. Returns the number of users updated.
    ///
    /// Not idempotent: each call counts the absences again.
    pub async fn record_no_shows(&self, eid: i64) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET noshow_count = noshow_count + 1
            WHERE uid IN (
                SELECT uid FROM sign_ups WHERE eid = ?1 AND attendance = FALSE
            )
            "#,
        )
        .bind(eid)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to record no-shows", e))?;

        Ok(result.rows_affected())
    }

    /// Delete the sign-up matching both ids; false when there was none
    pub async fn delete_sign_up(&self, uid: i64, eid: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM sign_ups WHERE uid = ?1 AND eid = ?2")
            .bind(uid)
            .bind(eid)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::query("failed to delete sign-up", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::event::NewEvent;
    use crate::models::user::{NewUser, SortDirection, UserColumn};
    use crate::store::test_support::temp_store;
    use crate::store::{Store, StoreError};

    /// Two users and two events; returns (uids, eids)
    async fn seed(store: &Store) -> ([i64; 2], [i64; 2]) {
        let mut uids = [0; 2];
        for (i, name) in ["Ada", "Grace"].iter().enumerate() {
            uids[i] = store
                .insert_user(&NewUser {
                    fname: name.to_string(),
                    lname: "Test".to_string(),
                    user_level: 1,
                    password_hash: "x".to_string(),
                })
                .await
                .unwrap()
                .uid;
        }

        let mut eids = [0; 2];
        for (i, date) in ["2024-05-01", "2024-05-08"].iter().enumerate() {
            eids[i] = store
                .insert_event(&NewEvent {
                    event_date: date.to_string(),
                    event_time: "18:00:00".to_string(),
                    location: "Main Hall".to_string(),
                })
                .await
                .unwrap()
                .eid;
        }

        (uids, eids)
    }

    #[tokio::test]
    async fn test_insert_sign_up_defaults_attendance() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;

        let sign_up = store.insert_sign_up(uids[0], eids[0]).await.unwrap();

        assert_eq!(sign_up.uid, uids[0]);
        assert_eq!(sign_up.eid, eids[0]);
        assert!(!sign_up.attendance);
    }

    #[tokio::test]
    async fn test_insert_sign_up_unknown_user() {
        let (store, _dir) = temp_store().await;
        let (_, eids) = seed(&store).await;

        let result = store.insert_sign_up(999, eids[0]).await;
        assert!(matches!(result, Err(StoreError::MissingReference(_))));
    }

    #[tokio::test]
    async fn test_insert_sign_up_twice_conflicts() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;

        store.insert_sign_up(uids[0], eids[0]).await.unwrap();
        let result = store.insert_sign_up(uids[0], eids[0]).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_sign_ups_filters() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;
        store.insert_sign_up(uids[0], eids[0]).await.unwrap();
        store.insert_sign_up(uids[1], eids[0]).await.unwrap();
        store.insert_sign_up(uids[0], eids[1]).await.unwrap();

        assert_eq!(store.list_sign_ups(0, 0).await.unwrap().len(), 3);
        assert_eq!(store.list_sign_ups(uids[0], 0).await.unwrap().len(), 2);
        assert_eq!(store.list_sign_ups(0, eids[0]).await.unwrap().len(), 2);

        let one = store.list_sign_ups(uids[1], eids[0]).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].uid, uids[1]);

        assert!(store.list_sign_ups(uids[1], eids[1]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_sign_up_matches_both_ids() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;
        store.insert_sign_up(uids[0], eids[0]).await.unwrap();
        store.insert_sign_up(uids[0], eids[1]).await.unwrap();

        assert!(store.delete_sign_up(uids[0], eids[1]).await.unwrap());
        assert!(!store.delete_sign_up(uids[0], eids[1]).await.unwrap());

        let remaining = store.list_sign_ups(uids[0], 0).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].eid, eids[0]);
    }

    #[tokio::test]
    async fn test_deleting_event_cascades_to_sign_ups() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;
        store.insert_sign_up(uids[0], eids[0]).await.unwrap();

        assert!(store.delete_event(eids[0]).await.unwrap());
        assert!(store.list_sign_ups(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_attendance() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;
        store.insert_sign_up(uids[0], eids[0]).await.unwrap();

        let updated = store.set_attendance(uids[0], eids[0], true).await.unwrap();
        assert!(updated.unwrap().attendance);

        let missing = store.set_attendance(uids[1], eids[0], true).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_record_no_shows_counts_absent_users() {
        let (store, _dir) = temp_store().await;
        let (uids, eids) = seed(&store).await;
        store.insert_sign_up(uids[0], eids[0]).await.unwrap();
        store.insert_sign_up(uids[1], eids[0]).await.unwrap();
        store.set_attendance(uids[1], eids[0], true).await.unwrap();

        assert_eq!(store.record_no_shows(eids[0]).await.unwrap(), 1);

        let users = store
            .list_users(UserColumn::Uid, SortDirection::Asc)
            .await
            .unwrap();
        assert_eq!(users[0].noshow_count, 1);
        assert_eq!(users[1].noshow_count, 0);

        assert_eq!(store.record_no_shows(eids[1]).await.unwrap(), 0);
    }
}
