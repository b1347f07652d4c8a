//! In-memory event store
//!
//! Same contract as the PostgreSQL store, kept in an ordered map.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;

use crate::domain::{Event, EventId, EventInput};

use super::{EventRepository, StoreError};

#[derive(Debug)]
struct MemoryState {
    next_id: EventId,
    events: BTreeMap<EventId, Event>,
}

/// Event store held in process memory
#[derive(Debug)]
pub struct MemoryEventStore {
    state: RwLock<MemoryState>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                events: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored events
    pub async fn len(&self) -> usize {
        self.state.read().await.events.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for MemoryEventStore {
    async fn create(&self, input: EventInput) -> Result<Event, StoreError> {
        let now = Utc::now().trunc_subsecs(6);
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let event = Event::from_input(id, input, now, now);
        state.events.insert(id, event.clone());

        Ok(event)
    }

    async fn get(&self, id: EventId) -> Result<Event, StoreError> {
        self.state
            .read()
            .await
            .events
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.state.read().await.events.values().cloned().collect())
    }

    async fn update(&self, id: EventId, input: EventInput) -> Result<Event, StoreError> {
        let now = Utc::now().trunc_subsecs(6);
        let mut state = self.state.write().await;

        let stored = state.events.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let updated_at = now.max(stored.created_at);
        *stored = Event::from_input(id, input, stored.created_at, updated_at);

        Ok(stored.clone())
    }

    async fn delete(&self, id: EventId) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .events
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
