//! Durable key-value persistence for planner collections and singletons.
//!
//! # Responsibility
//! - Define the raw text store contract ([`KeyValueStore`]) and its SQLite
//!   implementation.
//! - Provide the typed JSON layer used by repositories ([`put`], [`get`],
//!   [`try_get`], [`remove_keys`]).
//!
//! # Invariants
//! - Storage calls never panic; failures are logged and returned as values.
//! - There is no cache layer: every read re-fetches from the backing store.
//! - Each key holds one whole JSON document; writes replace it entirely.

mod json;
mod kv;

pub use json::{get, put, remove_keys, try_get};
pub use kv::{KeyValueStore, SqliteKeyValueStore, StoreKey};

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for I/O and (de)serialization failures.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Connection has not been migrated to the key-value schema.
    SchemaNotReady,
    /// Failure reported by a non-SQLite [`KeyValueStore`] implementation.
    Backend(String),
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::SchemaNotReady => write!(f, "store schema is not ready; run migrations first"),
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize value for key `{key}`: {source}")
            }
            Self::Deserialize { key, source } => {
                write!(f, "failed to deserialize value for key `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { source, .. } | Self::Deserialize { source, .. } => Some(source),
            Self::SchemaNotReady | Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
