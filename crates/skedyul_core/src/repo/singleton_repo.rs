//! Singleton record repository (profile, settings).
//!
//! # Invariants
//! - `get` always yields a value: the stored one, or `T::default()` when the
//!   key is unset or unreadable.
//! - `put` replaces the stored value unconditionally.

use crate::model::profile::Profile;
use crate::model::settings::Settings;
use crate::model::Singleton;
use crate::store::{self, KeyValueStore, StoreResult};
use std::marker::PhantomData;

pub struct SingletonRepository<S, T> {
    store: S,
    _record: PhantomData<fn() -> T>,
}

pub type ProfileRepository<S> = SingletonRepository<S, Profile>;
pub type SettingsRepository<S> = SingletonRepository<S, Settings>;

impl<S: KeyValueStore, T: Singleton> SingletonRepository<S, T> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn get(&self) -> T {
        store::get(&self.store, T::KEY).unwrap_or_default()
    }

    pub fn put(&self, value: &T) -> StoreResult<()> {
        store::put(&self.store, T::KEY, value)
    }
}
