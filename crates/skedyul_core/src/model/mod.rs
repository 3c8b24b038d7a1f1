//! Planner domain model.
//!
//! # Responsibility
//! - Define the records stored by the planner (subjects, teachers, tasks,
//!   grades) and the two singleton records (profile, settings).
//! - Keep the persisted JSON shape stable (camelCase field names).
//!
//! # Invariants
//! - Every collection record is identified by an opaque [`RecordId`] that is
//!   generated at creation time and never reused.
//! - Cross-record references are by id only and may dangle; readers resolve
//!   them as optional lookups.

pub mod grade;
pub mod profile;
pub mod settings;
pub mod subject;
pub mod task;
pub mod teacher;

use crate::store::StoreKey;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Opaque record identifier, unique within its collection.
pub type RecordId = String;

/// A record stored as one element of an ordered collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Store key holding the whole collection.
    const KEY: StoreKey;

    fn id(&self) -> &str;

    /// Field checks applied by create/edit entry points. Repositories store
    /// records without calling this.
    fn validate(&self) -> Result<(), ModelValidationError> {
        Ok(())
    }
}

/// A record with exactly one living value; [`Default`] fills in when unset.
pub trait Singleton: Serialize + DeserializeOwned + Default {
    const KEY: StoreKey;
}

/// Generates a practically unique record id.
///
/// UUID v7 text: a millisecond timestamp prefix followed by random bits.
/// No collision detection is performed.
pub fn generate_id() -> RecordId {
    Uuid::now_v7().to_string()
}

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}

/// Field-level validation failures for planner records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    EmptyField(&'static str),
    InvalidTime { field: &'static str, value: String },
    InvalidDate { field: &'static str, value: String },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidTime { field, value } => {
                write!(f, "{field} `{value}` is not a valid HH:MM time")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} `{value}` is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for ModelValidationError {}

/// Reads an optional reference, treating the legacy empty string as absent.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|id| !id.is_empty()))
}
