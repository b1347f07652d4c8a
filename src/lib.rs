//! event_api Library
//!
//! Re-exports modules for the server binary, the load tool and integration tests.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod store;

pub use config::{Config, ConfigError, LogFormat};
pub use domain::{Event, EventId, EventInput};
pub use error::{AppError, AppResult};
pub use store::{EventRepository, MemoryEventStore, PgEventStore, StoreError};
