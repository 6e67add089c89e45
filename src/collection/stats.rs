use serde::{Deserialize, Serialize};

/// Point-in-time statistics of an [`IndexedCollection`](super::IndexedCollection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub element_count: usize,
    pub properties: Vec<PropertyStats>,
}

/// Shape of a single property index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyStats {
    /// `Debug` rendering of the property identifier.
    pub property: String,
    pub distinct_values: usize,
    pub indexed_slots: usize,
    pub largest_bucket: usize,
}
