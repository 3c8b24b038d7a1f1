//! Teacher record.

use super::{generate_id, now_epoch_ms, ModelValidationError, Record, RecordId};
use crate::store::StoreKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: RecordId,
    pub name: String,
    pub subject_specialization: String,
    pub contact_info: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Teacher {
    /// Creates a teacher with a generated id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name)
    }

    /// Creates a teacher with a caller-provided id.
    pub fn with_id(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject_specialization: String::new(),
            contact_info: String::new(),
            created_at: now_epoch_ms(),
        }
    }
}

impl Record for Teacher {
    const KEY: StoreKey = StoreKey::Teachers;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ModelValidationError> {
        if self.name.trim().is_empty() {
            return Err(ModelValidationError::EmptyField("name"));
        }
        Ok(())
    }
}
