//! Domain module
//!
//! The event entity shared by the store and the HTTP layer.

mod event;

pub use event::{Event, EventId, EventInput};
