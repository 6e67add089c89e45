use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Value -> slot list mapping for a single property.
///
/// Slots are pushed in insertion order, so every bucket stays ascending.
/// A value with no slots has no entry at all.
#[derive(Debug, Clone)]
pub struct PropertyIndex<V> {
    buckets: HashMap<V, Vec<usize>>,
}

impl<V: Eq + Hash> PropertyIndex<V> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    pub fn insert(&mut self, value: V, slot: usize) {
        self.buckets.entry(value).or_default().push(slot);
    }

    pub fn slots<Q>(&self, value: &Q) -> &[usize]
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.contains_key(value)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets.keys()
    }

    pub fn distinct_len(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of slots across all buckets.
    pub fn slot_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn largest_bucket(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

impl<V: Eq + Hash> Default for PropertyIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
