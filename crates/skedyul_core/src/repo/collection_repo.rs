//! Collection repository contract and key-value implementation.
//!
//! # Responsibility
//! - Expose `list/add/update/delete` for subjects, teachers, tasks and grades.
//! - Resolve id references as optional lookups (`find`).
//!
//! # Invariants
//! - Every mutation reads the whole collection, applies the change in memory
//!   and rewrites the whole collection.
//! - `add` performs no duplicate-id check; callers generate unique ids.
//! - A stored collection that cannot be decoded counts as empty, for reads
//!   and mutations alike; the first mutation replaces it (logged as a warning).
//! - A backend read failure aborts the mutation before anything is written.

use crate::model::grade::Grade;
use crate::model::subject::Subject;
use crate::model::task::Task;
use crate::model::teacher::Teacher;
use crate::model::Record;
use crate::store::{self, KeyValueStore, StoreError, StoreResult};
use log::{debug, error, warn};
use std::marker::PhantomData;

/// Repository interface shared by every collection type.
pub trait CollectionRepository<T: Record> {
    /// Returns the full collection, empty when never written or unreadable.
    fn list(&self) -> Vec<T>;

    /// Appends `record` and persists the collection.
    fn add(&self, record: &T) -> StoreResult<()>;

    /// Replaces the record with the same id, keeping its position.
    ///
    /// Returns `Ok(false)` without writing when the id is unknown.
    fn update(&self, record: &T) -> StoreResult<bool>;

    /// Removes the record with `id`, keeping the order of the others.
    ///
    /// Returns `Ok(false)` without writing when the id is unknown.
    fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Looks up one record by id; a dangling reference yields `None`.
    fn find(&self, id: &str) -> Option<T> {
        self.list().into_iter().find(|record| record.id() == id)
    }
}

/// Key-value-backed collection repository.
pub struct KvCollectionRepository<S, T> {
    store: S,
    _record: PhantomData<fn() -> T>,
}

pub type SubjectRepository<S> = KvCollectionRepository<S, Subject>;
pub type TeacherRepository<S> = KvCollectionRepository<S, Teacher>;
pub type TaskRepository<S> = KvCollectionRepository<S, Task>;
pub type GradeRepository<S> = KvCollectionRepository<S, Grade>;

impl<S: KeyValueStore, T: Record> KvCollectionRepository<S, T> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    fn load_for_write(&self, op: &'static str) -> StoreResult<Vec<T>> {
        match store::try_get::<_, Vec<T>>(&self.store, T::KEY) {
            Ok(records) => Ok(records.unwrap_or_default()),
            Err(err @ StoreError::Deserialize { .. }) => {
                warn!(
                    "event=collection_{} module=repo status=recovered key={} reason=undecodable_replaced error={}",
                    op,
                    T::KEY.as_str(),
                    err
                );
                Ok(Vec::new())
            }
            Err(err) => {
                error!(
                    "event=collection_{} module=repo status=error key={} error_code=read_failed error={}",
                    op,
                    T::KEY.as_str(),
                    err
                );
                Err(err)
            }
        }
    }

    fn persist(&self, op: &'static str, records: &[T]) -> StoreResult<()> {
        store::put(&self.store, T::KEY, records)?;
        debug!(
            "event=collection_{} module=repo status=ok key={} count={}",
            op,
            T::KEY.as_str(),
            records.len()
        );
        Ok(())
    }
}

impl<S: KeyValueStore, T: Record> CollectionRepository<T> for KvCollectionRepository<S, T> {
    fn list(&self) -> Vec<T> {
        store::get(&self.store, T::KEY).unwrap_or_default()
    }

    fn add(&self, record: &T) -> StoreResult<()> {
        let mut records = self.load_for_write("add")?;
        records.push(record.clone());
        self.persist("add", &records)
    }

    fn update(&self, record: &T) -> StoreResult<bool> {
        let mut records = self.load_for_write("update")?;
        let Some(slot) = records.iter_mut().find(|stored| stored.id() == record.id()) else {
            debug!(
                "event=collection_update module=repo status=skipped key={} reason=not_found",
                T::KEY.as_str()
            );
            return Ok(false);
        };
        *slot = record.clone();
        self.persist("update", &records)?;
        Ok(true)
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.load_for_write("delete")?;
        let before = records.len();
        records.retain(|stored| stored.id() != id);
        if records.len() == before {
            debug!(
                "event=collection_delete module=repo status=skipped key={} reason=not_found",
                T::KEY.as_str()
            );
            return Ok(false);
        }
        self.persist("delete", &records)?;
        Ok(true)
    }
}
