// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{events, fallback, health, sign_ups, users};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Liveness
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))

        // Members
        .route("/users", get(users::list_users_handler).post(users::create_user_handler))
        .route("/users/{uid}", delete(users::delete_user_handler))

        // Events
        .route("/events", get(events::list_events_handler).post(events::create_event_handler))
        .route("/events/upcoming-and-past", get(events::upcoming_and_past_handler))
        .route("/events/{eid}", delete(events::delete_event_handler))
        .route("/events/{eid}/no-shows", post(events::record_no_shows_handler))

        // Sign-ups
        .route(
            "/sign-ups",
            get(sign_ups::list_sign_ups_handler)
                .post(sign_ups::create_sign_up_handler)
                .patch(sign_ups::update_attendance_handler)
                .delete(sign_ups::delete_sign_up_handler),
        )

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
