use super::{Store, StoreError};
use crate::models::user::{NewUser, SortDirection, User, UserColumn};

impl Store {
    /// All users ordered by a whitelisted column
    pub async fn list_users(
        &self,
        column: UserColumn,
        direction: SortDirection,
    ) -> Result<Vec<User>, StoreError> {
        // Both fragments are 'static strings from closed enums
        let sql = format!(
            "SELECT uid, fname, lname, user_level, noshow_count FROM users ORDER BY {} {}",
            column.as_sql(),
            direction.as_sql()
        );

        sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::query("failed to list users", e))
    }

    /// Insert a user and return the stored row
    pub async fn insert_user(&self, user: &NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (fname, lname, user_level, password_hash)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING uid, fname, lname, user_level, noshow_count
            "#,
        )
        .bind(&user.fname)
        .bind(&user.lname)
        .bind(user.user_level)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::query("failed to insert user", e))
    }

    #[cfg(test)]
    pub(crate) async fn password_hash(&self, uid: i64) -> Result<Option<String>, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE uid = ?1")
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::query("failed to load password hash", e))
    }

    /// Returns false when no user had this uid
    pub async fn delete_user(&self, uid: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE uid = ?1")
            .bind(uid)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::query("failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
