//! Grade record.
//!
//! `score`/`max_score` are not constrained here; see
//! [`crate::query::grades::calculate_grade_percentage`] for the zero
//! max-score behavior.

use super::{generate_id, now_epoch_ms, ModelValidationError, Record, RecordId};
use crate::query::grades::calculate_grade_percentage;
use crate::store::StoreKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: RecordId,
    pub subject_id: RecordId,
    pub title: String,
    pub score: f64,
    pub max_score: f64,
    pub date: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Grade {
    pub fn new(
        subject_id: impl Into<RecordId>,
        title: impl Into<String>,
        score: f64,
        max_score: f64,
    ) -> Self {
        Self::with_id(generate_id(), subject_id, title, score, max_score)
    }

    pub fn with_id(
        id: impl Into<RecordId>,
        subject_id: impl Into<RecordId>,
        title: impl Into<String>,
        score: f64,
        max_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            title: title.into(),
            score,
            max_score,
            date: String::new(),
            created_at: now_epoch_ms(),
        }
    }

    /// Rounded percentage of `score` over `max_score`.
    pub fn percentage(&self) -> f64 {
        calculate_grade_percentage(self.score, self.max_score)
    }
}

impl Record for Grade {
    const KEY: StoreKey = StoreKey::Grades;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ModelValidationError> {
        if self.title.trim().is_empty() {
            return Err(ModelValidationError::EmptyField("title"));
        }
        if self.subject_id.is_empty() {
            return Err(ModelValidationError::EmptyField("subjectId"));
        }
        Ok(())
    }
}
