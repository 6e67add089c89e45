//! Thread-shared access to an [`IndexedCollection`].
//!
//! A single coarse read-write lock guards the whole structure: readers share
//! it, `add_element` and `clear` take it exclusively. Index updates across
//! properties are therefore never observed half-done.
//!
//! A panicking extractor does not poison the lock: `add_element` writes
//! nothing until every extractor has returned, so the panic is re-raised only
//! after the guard is released cleanly. Only a panic inside a [`write`]
//! closure poisons the lock, and [`clear`] is the way back from that.
//!
//! [`write`]: SharedCollection::write
//! [`clear`]: SharedCollection::clear

use crate::collection::{CollectionStats, IndexedCollection};
use crate::core::{Result, Value};
use crate::property::PropertySet;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

pub struct SharedCollection<E, P, V = Value> {
    inner: Arc<RwLock<IndexedCollection<E, P, V>>>,
}

impl<E, P, V> SharedCollection<E, P, V>
where
    P: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash,
{
    pub fn new(properties: PropertySet<E, P, V>) -> Result<Self> {
        Ok(Self::from(IndexedCollection::new(properties)?))
    }

    pub fn add_element(&self, element: E) -> Result<()> {
        let mut guard = self.inner.write()?;
        match panic::catch_unwind(AssertUnwindSafe(|| guard.add_element(element))) {
            Ok(result) => result,
            Err(payload) => {
                drop(guard);
                panic::resume_unwind(payload)
            }
        }
    }

    /// Cloned matches, so the lock is released before returning.
    pub fn search_by_property<Q>(&self, property: &P, value: &Q) -> Result<Vec<E>>
    where
        E: Clone,
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let guard = self.inner.read()?;
        Ok(guard.search_iter(property, value).cloned().collect())
    }

    pub fn contains_value<Q>(&self, property: &P, value: &Q) -> Result<bool>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Ok(self.inner.read()?.contains_value(property, value))
    }

    pub fn contains(&self, element: &E) -> Result<bool>
    where
        E: PartialEq,
    {
        Ok(self.inner.read()?.contains(element))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.inner.read()?.is_empty())
    }

    /// Empty the collection. Also recovers a lock poisoned by a panicking
    /// [`write`](Self::write) closure, since nothing of the old state survives.
    pub fn clear(&self) -> Result<()> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.inner.clear_poison();
        Ok(())
    }

    /// All elements in insertion order, copied out under one read lock.
    pub fn snapshot(&self) -> Result<Vec<E>>
    where
        E: Clone,
    {
        Ok(self.inner.read()?.as_slice().to_vec())
    }

    pub fn stats(&self) -> Result<CollectionStats> {
        Ok(self.inner.read()?.stats())
    }

    /// Run `f` while holding the read lock.
    pub fn read<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&IndexedCollection<E, P, V>) -> R,
    {
        let guard = self.inner.read()?;
        Ok(f(&*guard))
    }

    /// Run `f` while holding the write lock, for compound updates that must
    /// appear atomic.
    pub fn write<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut IndexedCollection<E, P, V>) -> R,
    {
        let mut guard = self.inner.write()?;
        Ok(f(&mut *guard))
    }
}

impl<E, P, V> From<IndexedCollection<E, P, V>> for SharedCollection<E, P, V> {
    fn from(collection: IndexedCollection<E, P, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collection)),
        }
    }
}

impl<E, P, V> Clone for SharedCollection<E, P, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E, P, V> fmt::Debug for SharedCollection<E, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCollection").finish_non_exhaustive()
    }
}
