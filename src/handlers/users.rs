use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{NewUserBody, UsersQuery};
use crate::models::user::{NewUser, User};
use crate::utils::password::hash_password;
use crate::validation::extract::{ValidJson, ValidQuery};
use crate::validation::params::parse_id;
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// List users
///
/// GET /users?direction=<ASC|DESC>&column=<uid|fname|lname|user_level|noshow_count>
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    ValidQuery(ordering): ValidQuery<UsersQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .store
        .list_users(ordering.column, ordering.direction)
        .await?;

    debug!(
        count = users.len(),
        column = ordering.column.as_sql(),
        direction = ordering.direction.as_sql(),
        "Listed users"
    );

    Ok(Json(users))
}

/// Register a user
///
/// POST /users {fname, lname, level, password}
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(registration): ValidJson<NewUserBody>,
) -> Result<Json<User>, ApiError> {
    // Argon2 is deliberately slow; keep it off the async workers
    let password = registration.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| {
            warn!(error = %e, "Password hashing task failed");
            ApiError::PasswordHash
        })?
        .map_err(|e| {
            warn!(error = %e, "Password hashing failed");
            ApiError::PasswordHash
        })?;

    let user = state
        .store
        .insert_user(&NewUser {
            fname: registration.fname,
            lname: registration.lname,
            user_level: registration.level,
            password_hash,
        })
        .await?;

    info!(uid = user.uid, user_level = user.user_level, "User registered");

    Ok(Json(user))
}

/// Delete a user and their sign-ups
///
/// DELETE /users/{uid}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_uid): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let uid = parse_id(&raw_uid).ok_or_else(|| ApiError::validation("Invalid user ID"))?;

    let deleted = state.store.delete_user(uid).await?;

    info!(uid, deleted, "User delete requested");

    Ok(Json(deleted))
}
