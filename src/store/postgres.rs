//! PostgreSQL event store
//!
//! Every operation is a single statement; there are no transactions.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sqlx::PgPool;

use crate::domain::{Event, EventId, EventInput};

use super::row::{bind_insert, bind_update, decode_event};
use super::{EventRepository, StoreError};

const INSERT_EVENT: &str = r#"
    INSERT INTO events (
        title, description, location, start_time, end_time, created_by, created_at, updated_at
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id, title, description, location, start_time, end_time, created_by, created_at, updated_at
"#;

const SELECT_EVENT: &str = r#"
    SELECT id, title, description, location, start_time, end_time, created_by, created_at, updated_at
    FROM events
    WHERE id = $1
"#;

const SELECT_EVENTS: &str = r#"
    SELECT id, title, description, location, start_time, end_time, created_by, created_at, updated_at
    FROM events
"#;

// Conditional write: no row comes back when the id is gone.
const UPDATE_EVENT: &str = r#"
    UPDATE events
    SET title = $1, description = $2, location = $3, start_time = $4, end_time = $5,
        created_by = $6, updated_at = GREATEST($7, created_at)
    WHERE id = $8
    RETURNING id, title, description, location, start_time, end_time, created_by, created_at, updated_at
"#;

const DELETE_EVENT: &str = "DELETE FROM events WHERE id = $1";

/// Event store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    /// Create a new PgEventStore with a database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EventRepository for PgEventStore {
    async fn create(&self, input: EventInput) -> Result<Event, StoreError> {
        let now = Utc::now().trunc_subsecs(6);

        let row = bind_insert(sqlx::query(INSERT_EVENT), &input, now, now)
            .fetch_one(&self.pool)
            .await?;
        let event = decode_event(&row)?;

        tracing::debug!(event_id = event.id, "Event inserted");
        Ok(event)
    }

    async fn get(&self, id: EventId) -> Result<Event, StoreError> {
        let row = sqlx::query(SELECT_EVENT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        decode_event(&row)
    }

    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query(SELECT_EVENTS).fetch_all(&self.pool).await?;

        rows.iter().map(decode_event).collect()
    }

    async fn update(&self, id: EventId, input: EventInput) -> Result<Event, StoreError> {
        let now = Utc::now().trunc_subsecs(6);

        let row = bind_update(sqlx::query(UPDATE_EVENT), id, &input, now)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;
        let event = decode_event(&row)?;

        tracing::debug!(event_id = event.id, "Event updated");
        Ok(event)
    }

    async fn delete(&self, id: EventId) -> Result<(), StoreError> {
        let result = sqlx::query(DELETE_EVENT)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(event_id = id, "Event deleted");
        Ok(())
    }
}
