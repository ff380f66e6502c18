use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{EventsAroundQuery, EventsQuery, NewEventBody};
use crate::models::event::{Event, EventWithCount};
use crate::validation::extract::{ValidJson, ValidQuery};
use crate::validation::params::parse_id;
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// List events, optionally filtered
///
/// GET /events?date=<YYYY-MM-DD>&time=<HH:MM:SS>&location=<text>
pub async fn list_events_handler(
    State(state): State<Arc<AppState>>,
    ValidQuery(filter): ValidQuery<EventsQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.store.list_events(&filter).await?;

    debug!(count = events.len(), filter = ?filter, "Listed events");

    Ok(Json(events))
}

/// Create an event
///
/// POST /events {location, date, time}
pub async fn create_event_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(new_event): ValidJson<NewEventBody>,
) -> Result<Json<Event>, ApiError> {
    let event = state.store.insert_event(&new_event).await?;

    info!(
        eid = event.eid,
        date = %event.event_date,
        time = %event.event_time,
        location = %event.location,
        "Event created"
    );

    Ok(Json(event))
}

/// Upcoming and past events around a moment, with sign-up counts.
/// Responds with a two-element array: `[upcoming, past]`.
///
/// GET /events/upcoming-and-past?event_date=<YYYY-MM-DD>&event_time=<HH:MM:SS>
pub async fn upcoming_and_past_handler(
    State(state): State<Arc<AppState>>,
    ValidQuery(moment): ValidQuery<EventsAroundQuery>,
) -> Result<Json<(Vec<EventWithCount>, Vec<EventWithCount>)>, ApiError> {
    let (upcoming, past) = state.store.events_around(&moment.date, &moment.time).await?;

    debug!(
        upcoming = upcoming.len(),
        past = past.len(),
        "Listed upcoming and past events"
    );

    Ok(Json((upcoming, past)))
}

/// Count a no-show for everyone signed up to the event who did not attend
///
/// POST /events/{eid}/no-shows
pub async fn record_no_shows_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_eid): Path<String>,
) -> Result<Json<u64>, ApiError> {
    let eid = parse_id(&raw_eid).ok_or_else(|| ApiError::validation("Invalid event ID"))?;

    let updated = state.store.record_no_shows(eid).await?;

    info!(eid, users = updated, "No-shows recorded");

    Ok(Json(updated))
}

/// Delete an event and its sign-ups
///
/// DELETE /events/{eid}
pub async fn delete_event_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_eid): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let eid = parse_id(&raw_eid).ok_or_else(|| ApiError::validation("Invalid event ID"))?;

    let deleted = state.store.delete_event(eid).await?;

    info!(eid, deleted, "Event delete requested");

    Ok(Json(deleted))
}
