//! Response helpers
//!
//! The `{message, data}` envelope returned by create and update.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Typed `{message, data}` wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// 201 with an envelope body
pub fn created<T>(data: T, message: impl Into<String>) -> (StatusCode, Json<Envelope<T>>)
where
    T: Serialize,
{
    (StatusCode::CREATED, Json(Envelope::new(message, data)))
}

/// 200 with an envelope body
pub fn success<T>(data: T, message: impl Into<String>) -> (StatusCode, Json<Envelope<T>>)
where
    T: Serialize,
{
    (StatusCode::OK, Json(Envelope::new(message, data)))
}
