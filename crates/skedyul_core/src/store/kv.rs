//! Raw text key-value store contract and SQLite implementation.

use super::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed store keys, one per collection and one per singleton record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Subjects,
    Teachers,
    Tasks,
    Grades,
    Profile,
    Settings,
}

impl StoreKey {
    /// Every key owned by the planner, in backup/restore order.
    pub const ALL: [StoreKey; 6] = [
        StoreKey::Subjects,
        StoreKey::Teachers,
        StoreKey::Tasks,
        StoreKey::Grades,
        StoreKey::Profile,
        StoreKey::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Teachers => "teachers",
            Self::Tasks => "tasks",
            Self::Grades => "grades",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }
}

/// Durable text storage keyed by fixed string names.
///
/// Implementations must be safe to call repeatedly and must not panic.
pub trait KeyValueStore {
    /// Returns the stored text, or `None` when the key was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    /// Inserts or replaces the text stored under `key`.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Deletes every given key. Missing keys are ignored.
    fn remove_all(&self, keys: &[&str]) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).write(key, value)
    }

    fn remove_all(&self, keys: &[&str]) -> StoreResult<()> {
        (**self).remove_all(keys)
    }
}

/// SQLite-backed key-value store over the `kv_entries` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a migrated connection (see [`crate::db::open_db`]).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking that the `kv_entries` table exists.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let ready: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )?;
        if ready != 1 {
            return Err(StoreError::SchemaNotReady);
        }
        Ok(Self::new(conn))
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for key in keys {
            tx.execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, SqliteKeyValueStore, StoreKey};
    use crate::db::open_db_in_memory;
    use crate::store::StoreError;
    use rusqlite::Connection;

    #[test]
    fn write_then_read_replaces_previous_value() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKeyValueStore::try_new(&conn).unwrap();

        assert_eq!(store.read("tasks").unwrap(), None);
        store.write("tasks", "[]").unwrap();
        store.write("tasks", "[1]").unwrap();
        assert_eq!(store.read("tasks").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn remove_all_ignores_missing_keys() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKeyValueStore::new(&conn);
        store.write("profile", "{}").unwrap();

        store.remove_all(&["profile", "never-written"]).unwrap();
        assert_eq!(store.read("profile").unwrap(), None);
    }

    #[test]
    fn try_new_rejects_unmigrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteKeyValueStore::try_new(&conn)
            .err()
            .expect("bare connection must be rejected");
        assert!(matches!(err, StoreError::SchemaNotReady));
    }

    #[test]
    fn store_keys_are_unique() {
        let mut names = StoreKey::ALL.map(StoreKey::as_str).to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
