//! API Routes
//!
//! HTTP endpoint definitions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};

use crate::domain::{Event, EventInput};
use crate::error::{AppError, AppResult};
use crate::store::EventRepository;

use super::extract::{parse_event_id, JsonBody};
use super::response::{created, success, Envelope};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/",
            get(missing_event_id)
                .put(missing_event_id)
                .delete(missing_event_id),
        )
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .fallback(unknown_route)
}

// =========================================================================
// GET /events
// =========================================================================

/// List every event
async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = state.events.list().await?;
    Ok(Json(events))
}

// =========================================================================
// POST /events
// =========================================================================

/// Create a new event
async fn create_event(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<EventInput>,
) -> AppResult<(StatusCode, Json<Envelope<Event>>)> {
    let event = state.events.create(storable(input)?).await?;

    tracing::info!(event_id = event.id, "Event created");
    Ok(created(event, "Event created"))
}

// =========================================================================
// GET /events/:id
// =========================================================================

/// Get event by ID
async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Event>> {
    let id = parse_event_id(&raw_id)?;
    let event = state.events.get(id).await?;
    Ok(Json(event))
}

// =========================================================================
// PUT /events/:id
// =========================================================================

/// Replace every writable field of an event
async fn update_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<EventInput>,
) -> AppResult<(StatusCode, Json<Envelope<Event>>)> {
    let id = parse_event_id(&raw_id)?;
    let event = state.events.update(id, storable(input)?).await?;

    tracing::info!(event_id = event.id, "Event updated");
    Ok(success(event, "Event updated"))
}

// =========================================================================
// DELETE /events/:id
// =========================================================================

/// Delete event by ID
async fn delete_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<&'static str> {
    let id = parse_event_id(&raw_id)?;
    state.events.delete(id).await?;

    tracing::info!(event_id = id, "Event deleted");
    Ok("Event deleted")
}

/// Reject text the database cannot hold before it reaches the store
fn storable(input: EventInput) -> AppResult<EventInput> {
    if input.contains_nul() {
        return Err(AppError::Decode(
            "text fields must not contain NUL characters".to_string(),
        ));
    }
    Ok(input)
}

/// `/events/` with nothing after the slash
async fn missing_event_id() -> AppError {
    AppError::BadRequest("missing event id".to_string())
}

async fn unknown_route(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
