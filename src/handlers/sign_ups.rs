use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{AttendanceBody, NewSignUpBody, SignUpKeyQuery, SignUpsQuery};
use crate::models::sign_up::SignUp;
use crate::validation::extract::{ValidJson, ValidQuery};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{debug, info};

/// List sign-ups; a missing or zero id matches everything
///
/// GET /sign-ups?uid=<int>&eid=<int>
pub async fn list_sign_ups_handler(
    State(state): State<Arc<AppState>>,
    ValidQuery(filter): ValidQuery<SignUpsQuery>,
) -> Result<Json<Vec<SignUp>>, ApiError> {
    let sign_ups = state.store.list_sign_ups(filter.uid, filter.eid).await?;

    debug!(
        uid = filter.uid,
        eid = filter.eid,
        count = sign_ups.len(),
        "Listed sign-ups"
    );

    Ok(Json(sign_ups))
}

/// Sign a user up for an event; attendance starts out false
///
/// POST /sign-ups {uid, eid}
pub async fn create_sign_up_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(key): ValidJson<NewSignUpBody>,
) -> Result<Json<SignUp>, ApiError> {
    let sign_up = state.store.insert_sign_up(key.uid, key.eid).await?;

    info!(uid = sign_up.uid, eid = sign_up.eid, "User signed up");

    Ok(Json(sign_up))
}

/// Mark whether a signed-up user attended
///
/// PATCH /sign-ups {uid, eid, attendance}
pub async fn update_attendance_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(update): ValidJson<AttendanceBody>,
) -> Result<Json<SignUp>, ApiError> {
    let sign_up = state
        .store
        .set_attendance(update.uid, update.eid, update.attendance)
        .await?
        .ok_or_else(|| ApiError::NotFound("Sign-up not found".to_string()))?;

    info!(
        uid = sign_up.uid,
        eid = sign_up.eid,
        attendance = sign_up.attendance,
        "Attendance updated"
    );

    Ok(Json(sign_up))
}

/// Cancel a sign-up
///
/// DELETE /sign-ups?uid=<int>&eid=<int>
pub async fn delete_sign_up_handler(
    State(state): State<Arc<AppState>>,
    ValidQuery(key): ValidQuery<SignUpKeyQuery>,
) -> Result<Json<bool>, ApiError> {
    let deleted = state.store.delete_sign_up(key.uid, key.eid).await?;

    info!(uid = key.uid, eid = key.eid, deleted, "Sign-up delete requested");

    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::create_test_state;
    use crate::models::event::NewEvent;
    use crate::models::user::NewUser;
    use crate::validation::params::{AttendanceUpdate, SignUpFilter, SignUpKey};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    /// One user and one event; returns (uid, eid)
    async fn seed(state: &AppState) -> (i64, i64) {
        let user = state
            .store
            .insert_user(&NewUser {
                fname: "Ada".to_string(),
                lname: "Lovelace".to_string(),
                user_level: 1,
                password_hash: "x".to_string(),
            })
            .await
            .unwrap();
        let event = state
            .store
            .insert_event(&NewEvent {
                event_date: "2024-05-01".to_string(),
                event_time: "18:00:00".to_string(),
                location: "Main Hall".to_string(),
            })
            .await
            .unwrap();
        (user.uid, event.eid)
    }

    #[tokio::test]
    async fn test_create_sign_up_attendance_false() {
        let (state, _dir) = create_test_state().await;
        let (uid, eid) = seed(&state).await;

        let Json(sign_up) = create_sign_up_handler(State(state), ValidJson(SignUpKey { uid, eid }))
            .await
            .unwrap();

        assert_eq!((sign_up.uid, sign_up.eid), (uid, eid));
        assert!(!sign_up.attendance);
    }

    #[tokio::test]
    async fn test_create_sign_up_unknown_event_is_not_found() {
        let (state, _dir) = create_test_state().await;
        let (uid, _) = seed(&state).await;

        let result =
            create_sign_up_handler(State(state), ValidJson(SignUpKey { uid, eid: 999 })).await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_is_conflict() {
        let (state, _dir) = create_test_state().await;
        let (uid, eid) = seed(&state).await;

        create_sign_up_handler(State(state.clone()), ValidJson(SignUpKey { uid, eid }))
            .await
            .unwrap();
        let result = create_sign_up_handler(State(state), ValidJson(SignUpKey { uid, eid })).await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_attendance() {
        let (state, _dir) = create_test_state().await;
        let (uid, eid) = seed(&state).await;
        create_sign_up_handler(State(state.clone()), ValidJson(SignUpKey { uid, eid }))
            .await
            .unwrap();

        let Json(sign_up) = update_attendance_handler(
            State(state.clone()),
            ValidJson(AttendanceUpdate {
                uid,
                eid,
                attendance: true,
            }),
        )
        .await
        .unwrap();
        assert!(sign_up.attendance);

        let Json(listed) =
            list_sign_ups_handler(State(state), ValidQuery(SignUpFilter { uid, eid: 0 }))
                .await
                .unwrap();
        assert_eq!(listed, vec![sign_up]);
    }

    #[tokio::test]
    async fn test_update_attendance_missing_sign_up() {
        let (state, _dir) = create_test_state().await;
        let (uid, eid) = seed(&state).await;

        let result = update_attendance_handler(
            State(state),
            ValidJson(AttendanceUpdate {
                uid,
                eid,
                attendance: true,
            }),
        )
        .await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_sign_up() {
        let (state, _dir) = create_test_state().await;
        let (uid, eid) = seed(&state).await;
        create_sign_up_handler(State(state.clone()), ValidJson(SignUpKey { uid, eid }))
            .await
            .unwrap();

        let Json(first) = delete_sign_up_handler(State(state.clone()), ValidQuery(SignUpKey { uid, eid }))
            .await
            .unwrap();
        let Json(second) = delete_sign_up_handler(State(state), ValidQuery(SignUpKey { uid, eid }))
            .await
            .unwrap();

        assert!(first);
        assert!(!second);
    }
}
