//! Event entity
//!
//! The persisted record and the caller-writable subset used by create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of an event
pub type EventId = i64;

/// A scheduled occurrence as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Build a record from the writable fields plus the system-assigned ones.
    pub fn from_input(
        id: EventId,
        input: EventInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            location: input.location,
            start_time: input.start_time,
            end_time: input.end_time,
            created_by: input.created_by,
            created_at,
            updated_at,
        }
    }

    /// The writable part of this record
    pub fn to_input(&self) -> EventInput {
        EventInput {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            created_by: self.created_by.clone(),
        }
    }
}

/// Fields a caller may write.
///
/// Missing keys decode to empty strings and the Unix epoch, so an update
/// always replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: String,
}

impl EventInput {
    /// True if any text field holds a NUL character, which TEXT columns cannot store.
    pub fn contains_nul(&self) -> bool {
        [&self.title, &self.description, &self.location, &self.created_by]
            .iter()
            .any(|field| field.contains('\0'))
    }
}
