//! Whole-planner snapshot bundle.
//!
//! # Invariants
//! - A snapshot carries all six store values (four collections, two
//!   singletons) with the same JSON field names as the store.
//! - Snapshots are not transactionally consistent: each store key is read
//!   independently.

use crate::model::grade::Grade;
use crate::model::profile::Profile;
use crate::model::settings::Settings;
use crate::model::subject::Subject;
use crate::model::task::Task;
use crate::model::teacher::Teacher;
use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Aggregate of every planner store value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub subjects: Vec<Subject>,
    pub teachers: Vec<Teacher>,
    pub tasks: Vec<Task>,
    pub grades: Vec<Grade>,
    pub profile: Profile,
    pub settings: Settings,
}

impl PlannerSnapshot {
    /// Parses a JSON backup bundle.
    pub fn from_json(text: &str) -> Result<Self, BackupError> {
        serde_json::from_str(text).map_err(BackupError::Malformed)
    }

    /// Serializes the bundle as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BackupError> {
        serde_json::to_string_pretty(self).map_err(BackupError::Encode)
    }

    /// Number of collection records in the bundle.
    pub fn record_count(&self) -> usize {
        self.subjects.len() + self.teachers.len() + self.tasks.len() + self.grades.len()
    }
}

#[derive(Debug)]
pub enum BackupError {
    /// Bundle text does not match the snapshot shape.
    Malformed(serde_json::Error),
    Encode(serde_json::Error),
    Store(StoreError),
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed backup bundle: {err}"),
            Self::Encode(err) => write!(f, "failed to encode backup bundle: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) | Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for BackupError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
