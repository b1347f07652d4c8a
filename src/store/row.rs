//! Row mapping
//!
//! Translates between the fixed `events` column layout and [`Event`] records.

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Decode, Postgres, Row, Type};

use crate::domain::{Event, EventId, EventInput};

use super::StoreError;

/// Column list every read statement selects, in decode order
pub const EVENT_COLUMNS: &str =
    "id, title, description, location, start_time, end_time, created_by, created_at, updated_at";

const EVENT_COLUMN_COUNT: usize = 9;

pub(crate) type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Decode a row laid out as [`EVENT_COLUMNS`].
pub fn decode_event(row: &PgRow) -> Result<Event, StoreError> {
    if row.len() != EVENT_COLUMN_COUNT {
        return Err(StoreError::Decode(format!(
            "expected {} columns, found {}",
            EVENT_COLUMN_COUNT,
            row.len()
        )));
    }

    Ok(Event {
        id: column(row, 0)?,
        title: column(row, 1)?,
        description: column(row, 2)?,
        location: column(row, 3)?,
        start_time: column(row, 4)?,
        end_time: column(row, 5)?,
        created_by: column(row, 6)?,
        created_at: column(row, 7)?,
        updated_at: column(row, 8)?,
    })
}

fn column<'r, T>(row: &'r PgRow, index: usize) -> Result<T, StoreError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(index).map_err(StoreError::from_column)
}

/// Bind values for the insert statement:
/// `title, description, location, start_time, end_time, created_by, created_at, updated_at`.
pub(crate) fn bind_insert<'q>(
    query: PgQuery<'q>,
    input: &'q EventInput,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> PgQuery<'q> {
    query
        .bind(input.title.as_str())
        .bind(input.description.as_str())
        .bind(input.location.as_str())
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.created_by.as_str())
        .bind(created_at)
        .bind(updated_at)
}

/// Bind values for the update statement:
/// `title, description, location, start_time, end_time, created_by, updated_at, id`.
pub(crate) fn bind_update<'q>(
    query: PgQuery<'q>,
    id: EventId,
    input: &'q EventInput,
    updated_at: DateTime<Utc>,
) -> PgQuery<'q> {
    query
        .bind(input.title.as_str())
        .bind(input.description.as_str())
        .bind(input.location.as_str())
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.created_by.as_str())
        .bind(updated_at)
        .bind(id)
}
