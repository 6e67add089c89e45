//! The indexed collection.
//!
//! Elements live in an append-only vector; their position there is their
//! slot. Every registered property keeps a hash index from extracted value to
//! the ascending list of slots that produced it, so equality lookups touch a
//! single bucket instead of scanning all elements.

pub mod index;
pub mod iter;
pub mod stats;

pub use index::PropertyIndex;
pub use iter::Matches;
pub use stats::{CollectionStats, PropertyStats};

use crate::core::{Result, Value};
use crate::property::{PropertySet, SearchableProperty, property_label};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{Level, event};

/// In-memory collection searchable by one or more predeclared properties.
///
/// # Examples
///
/// ```
/// use multiprop::{IndexedCollection, PropertySet, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Item {
///     color: &'static str,
///     weight: i64,
/// }
///
/// # fn main() -> multiprop::Result<()> {
/// let properties = PropertySet::new()
///     .property("color", |item: &Item| Value::from(item.color))
///     .property("weight", |item: &Item| Value::from(item.weight));
///
/// let mut items = IndexedCollection::new(properties)?;
/// items.add_element(Item { color: "red", weight: 1 })?;
/// items.add_element(Item { color: "blue", weight: 1 })?;
/// items.add_element(Item { color: "red", weight: 2 })?;
///
/// let red = items.search_by_property(&"color", &Value::from("red"));
/// assert_eq!(red.len(), 2);
/// assert!(!items.contains_value(&"color", &Value::from("green")));
/// # Ok(())
/// # }
/// ```
pub struct IndexedCollection<E, P, V = Value> {
    elements: Vec<E>,
    properties: PropertySet<E, P, V>,
    positions: HashMap<P, usize>,
    indexes: Vec<PropertyIndex<V>>,
}

impl<E, P, V> IndexedCollection<E, P, V>
where
    P: Eq + Hash + Clone + fmt::Debug,
    V: Eq + Hash,
{
    /// Create an empty collection indexed by `properties`.
    ///
    /// Fails with [`CollectionError::Configuration`](crate::CollectionError::Configuration)
    /// when the set is empty or declares an identifier twice.
    pub fn new(properties: PropertySet<E, P, V>) -> Result<Self> {
        Self::with_capacity(properties, 0)
    }

    /// Like [`new`](Self::new), reserving room for `capacity` elements.
    pub fn with_capacity(properties: PropertySet<E, P, V>, capacity: usize) -> Result<Self> {
        let positions = properties.positions()?;
        let indexes = (0..properties.len()).map(|_| PropertyIndex::new()).collect();

        event!(
            Level::DEBUG,
            properties = properties.len(),
            capacity,
            "indexed collection created"
        );

        Ok(Self {
            elements: Vec::with_capacity(capacity),
            properties,
            positions,
            indexes,
        })
    }

    /// Index `element` under every property, then append it.
    ///
    /// All extractors run before anything is written, so an extraction
    /// failure leaves the collection exactly as it was.
    pub fn add_element(&mut self, element: E) -> Result<()> {
        let slot = self.elements.len();
        let values = self
            .properties
            .iter()
            .map(|descriptor| descriptor.extract(&element))
            .collect::<Result<Vec<V>>>()?;

        for (index, value) in self.indexes.iter_mut().zip(values) {
            index.insert(value, slot);
        }
        self.elements.push(element);

        event!(Level::TRACE, slot, "element indexed");
        Ok(())
    }

    /// Add elements one by one, stopping at the first extraction failure.
    ///
    /// Elements before the failing one stay in the collection.
    pub fn extend_from<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
    {
        let elements = elements.into_iter();
        self.elements.reserve(elements.size_hint().0);
        for element in elements {
            self.add_element(element)?;
        }
        Ok(())
    }

    /// Every element whose `property` value equals `value`, in insertion order.
    ///
    /// Unregistered properties and unknown values yield an empty vector.
    pub fn search_by_property<Q>(&self, property: &P, value: &Q) -> Vec<&E>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.search_iter(property, value).collect()
    }

    /// Lazy form of [`search_by_property`](Self::search_by_property).
    pub fn search_iter<Q>(&self, property: &P, value: &Q) -> Matches<'_, E>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Matches::new(&self.elements, self.slots(property, value))
    }

    pub fn contains_value<Q>(&self, property: &P, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index(property)
            .is_some_and(|index| index.contains(value))
    }

    pub fn count_by_property<Q>(&self, property: &P, value: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots(property, value).len()
    }

    /// Distinct values currently indexed under `property`, in no particular order.
    pub fn distinct_values<'a>(
        &'a self,
        property: &P,
    ) -> impl Iterator<Item = &'a V> + use<'a, E, P, V> {
        self.index(property)
            .into_iter()
            .flat_map(|index| index.values())
    }

    pub fn is_registered(&self, property: &P) -> bool {
        self.positions.contains_key(property)
    }

    pub fn stats(&self) -> CollectionStats {
        let properties = self
            .properties
            .ids()
            .zip(&self.indexes)
            .map(|(id, index)| PropertyStats {
                property: property_label(id),
                distinct_values: index.distinct_len(),
                indexed_slots: index.slot_count(),
                largest_bucket: index.largest_bucket(),
            })
            .collect();

        CollectionStats {
            element_count: self.elements.len(),
            properties,
        }
    }

    /// Drop every element and every index entry.
    pub fn clear(&mut self) {
        let discarded = self.elements.len();
        for index in &mut self.indexes {
            index.clear();
        }
        self.elements.clear();

        event!(Level::DEBUG, discarded, "indexed collection cleared");
    }

    fn index(&self, property: &P) -> Option<&PropertyIndex<V>> {
        self.positions
            .get(property)
            .map(|&position| &self.indexes[position])
    }

    fn slots<Q>(&self, property: &P, value: &Q) -> &[usize]
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index(property) {
            Some(index) => index.slots(value),
            None => &[],
        }
    }
}

impl<E, P, V> IndexedCollection<E, P, V> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element stored at `slot`.
    pub fn get(&self, slot: usize) -> Option<&E> {
        self.elements.get(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Registered property identifiers in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &P> {
        self.properties.ids()
    }

    /// Linear scan by element equality; does not consult any index.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.elements.contains(element)
    }
}

impl<E: 'static, P> IndexedCollection<E, P, P::Value>
where
    P: SearchableProperty<E>,
    P::Value: 'static,
{
    /// Collection indexed by every variant of the enumeration `P`.
    pub fn from_enum() -> Result<Self> {
        Self::new(PropertySet::from_enum())
    }
}

impl<E: Clone, P: Clone, V: Clone> Clone for IndexedCollection<E, P, V> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            properties: self.properties.clone(),
            positions: self.positions.clone(),
            indexes: self.indexes.clone(),
        }
    }
}

// Indexes are a deterministic function of elements and properties, so they
// take no part in equality or hashing.
impl<E: PartialEq, P: PartialEq, V> PartialEq for IndexedCollection<E, P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements && self.properties.ids().eq(other.properties.ids())
    }
}

impl<E: Eq, P: Eq, V> Eq for IndexedCollection<E, P, V> {}

impl<E: Hash, P: Hash, V> Hash for IndexedCollection<E, P, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
        for id in self.properties.ids() {
            id.hash(state);
        }
    }
}

impl<E: fmt::Debug, P: fmt::Debug, V> fmt::Debug for IndexedCollection<E, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedCollection")
            .field("properties", &self.properties)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<'a, E, P, V> IntoIterator for &'a IndexedCollection<E, P, V> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E, P, V> IntoIterator for IndexedCollection<E, P, V> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
