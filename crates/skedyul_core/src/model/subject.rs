//! Subject (class) record and its weekly schedule slot.
//!
//! # Invariants
//! - `start_time`/`end_time` are local wall-clock `HH:MM` strings without a
//!   timezone.
//! - `days_of_week` holds full English weekday names (`Monday`...).
//! - `teacher_id` may reference a deleted teacher.

use super::{
    empty_as_none, generate_id, now_epoch_ms, ModelValidationError, Record, RecordId,
};
use crate::query::schedule::random_subject_color;
use crate::store::StoreKey;
use crate::validate::is_valid_time;
use serde::{Deserialize, Serialize};

/// Academic term a subject belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Term {
    #[default]
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: RecordId,
    pub name: String,
    /// Display color as `#rrggbb`.
    pub color: String,
    pub room: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub teacher_id: Option<RecordId>,
    pub term: Term,
    pub notes: String,
    pub days_of_week: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Subject {
    /// Creates a subject with a generated id, a palette color and the current
    /// timestamp.
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self::with_id(generate_id(), name, start_time, end_time)
    }

    /// Creates a subject with a caller-provided id.
    pub fn with_id(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: random_subject_color().to_string(),
            room: String::new(),
            teacher_id: None,
            term: Term::default(),
            notes: String::new(),
            days_of_week: Vec::new(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            created_at: now_epoch_ms(),
        }
    }

    /// Returns whether the subject meets on the given weekday name.
    pub fn meets_on(&self, weekday: &str) -> bool {
        self.days_of_week.iter().any(|day| day == weekday)
    }
}

impl Record for Subject {
    const KEY: StoreKey = StoreKey::Subjects;

    fn id(&self) -> &str {
        &self.id
    }

    /// Checks name and time-slot fields.
    fn validate(&self) -> Result<(), ModelValidationError> {
        if self.name.trim().is_empty() {
            return Err(ModelValidationError::EmptyField("name"));
        }
        for (field, value) in [("startTime", &self.start_time), ("endTime", &self.end_time)] {
            if !is_valid_time(value) {
                return Err(ModelValidationError::InvalidTime {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
