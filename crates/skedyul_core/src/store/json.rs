//! Typed JSON layer over [`KeyValueStore`].
//!
//! # Invariants
//! - [`put`] and [`get`] never panic and log every failure.
//! - [`get`] collapses "absent", "unreadable" and "undecodable" into `None`;
//!   callers that must tell them apart use [`try_get`].

use super::{KeyValueStore, StoreError, StoreKey, StoreResult};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes `value` and writes it under `key`.
///
/// Failures are logged and returned; ignoring the result reproduces the
/// fire-and-forget write semantics of the planner.
pub fn put<S, T>(store: &S, key: StoreKey, value: &T) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(|source| StoreError::Serialize {
            key: key.as_str().to_string(),
            source,
        })
        .and_then(|text| store.write(key.as_str(), &text));

    match &result {
        Ok(()) => debug!("event=store_put module=store status=ok key={}", key.as_str()),
        Err(err) => error!(
            "event=store_put module=store status=error key={} error={}",
            key.as_str(),
            err
        ),
    }
    result
}

/// Reads and deserializes the value under `key`.
///
/// Returns `None` when the key was never written or when reading/decoding
/// fails (the failure is logged).
pub fn get<S, T>(store: &S, key: StoreKey) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match try_get(store, key) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=store_get module=store status=error key={} error={}",
                key.as_str(),
                err
            );
            None
        }
    }
}

/// Strict variant of [`get`] that surfaces read and decode errors.
pub fn try_get<S, T>(store: &S, key: StoreKey) -> StoreResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(text) = store.read(key.as_str())? else {
        return Ok(None);
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| StoreError::Deserialize {
            key: key.as_str().to_string(),
            source,
        })
}

/// Deletes all given keys in one store call.
pub fn remove_keys<S>(store: &S, keys: &[StoreKey]) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
{
    let names = keys.iter().map(|key| key.as_str()).collect::<Vec<_>>();
    let result = store.remove_all(&names);
    if let Err(err) = &result {
        error!(
            "event=store_remove module=store status=error key_count={} error={}",
            names.len(),
            err
        );
    }
    result
}
