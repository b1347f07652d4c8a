//! API module
//!
//! HTTP API endpoints and middleware.

pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::store::EventRepository;

pub use response::Envelope;
pub use routes::{create_router, AppState};

/// Build the application router around an event repository
pub fn build_router(events: Arc<dyn EventRepository>) -> Router {
    Router::new()
        // Health check (no database access)
        .route("/health", axum::routing::get(health_check))
        .merge(create_router())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(events))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
