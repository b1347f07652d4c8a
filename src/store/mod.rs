//! Event Store module
//!
//! Persistence layer for events.
//! Row mapping, the repository trait and its PostgreSQL and in-memory implementations.

mod error;
mod memory;
mod postgres;
mod repository;
pub mod row;

pub use error::StoreError;
pub use memory::MemoryEventStore;
pub use postgres::PgEventStore;
pub use repository::EventRepository;
