//! Event repository
//!
//! The storage seam the HTTP layer depends on.

use async_trait::async_trait;

use crate::domain::{Event, EventId, EventInput};

use super::StoreError;

/// Persisted CRUD operations on events.
///
/// Implementations own all persisted state; records they hand out are copies.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event, stamping `created_at` and `updated_at` with the current time.
    async fn create(&self, input: EventInput) -> Result<Event, StoreError>;

    /// Fetch one event.
    async fn get(&self, id: EventId) -> Result<Event, StoreError>;

    /// Fetch every event in storage-native order.
    async fn list(&self) -> Result<Vec<Event>, StoreError>;

    /// Replace every writable field of an existing event and refresh `updated_at`.
    ///
    /// `id` and `created_at` are preserved. Fails with [`StoreError::NotFound`]
    /// when the event does not exist at the time of the write.
    async fn update(&self, id: EventId, input: EventInput) -> Result<Event, StoreError>;

    /// Remove one event.
    async fn delete(&self, id: EventId) -> Result<(), StoreError>;
}
