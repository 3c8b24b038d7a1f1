//! Task (homework/assignment) record.

use super::{
    empty_as_none, generate_id, now_epoch_ms, ModelValidationError, Record, RecordId,
};
use crate::store::StoreKey;
use crate::validate::is_valid_date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub subject_id: Option<RecordId>,
    /// `YYYY-MM-DD`; compared as text against today's date.
    pub due_date: String,
    pub priority: Priority,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an incomplete, medium-priority task with a generated id.
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::with_id(generate_id(), title, due_date)
    }

    /// Creates a task with a caller-provided id.
    pub fn with_id(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            subject_id: None,
            due_date: due_date.into(),
            priority: Priority::default(),
            completed: false,
            created_at: now_epoch_ms(),
        }
    }
}

impl Record for Task {
    const KEY: StoreKey = StoreKey::Tasks;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ModelValidationError> {
        if self.title.trim().is_empty() {
            return Err(ModelValidationError::EmptyField("title"));
        }
        if !is_valid_date(&self.due_date) {
            return Err(ModelValidationError::InvalidDate {
                field: "dueDate",
                value: self.due_date.clone(),
            });
        }
        Ok(())
    }
}
