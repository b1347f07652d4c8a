//! Request extractors
//!
//! Body and path decoding that report failures as [`AppError`].

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::domain::EventId;
use crate::error::AppError;

/// JSON body decoded regardless of the request's `Content-Type`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Decode(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Parse the trailing path segment of an item URL.
pub fn parse_event_id(raw: &str) -> Result<EventId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid event id '{}'", raw)))
}
