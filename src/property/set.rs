use super::{PropertyDescriptor, SearchableProperty};
use crate::core::{BoxError, CollectionError, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Ordered set of property descriptors handed to a collection at construction.
///
/// # Examples
///
/// ```
/// use multiprop::{PropertySet, Value};
///
/// struct Item {
///     color: String,
///     weight: i64,
/// }
///
/// let properties = PropertySet::new()
///     .property("color", |item: &Item| Value::from(item.color.as_str()))
///     .property("weight", |item: &Item| Value::from(item.weight));
///
/// assert_eq!(properties.len(), 2);
/// ```
pub struct PropertySet<E, P, V> {
    descriptors: Vec<PropertyDescriptor<E, P, V>>,
}

impl<E, P, V> PropertySet<E, P, V> {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Append an already built descriptor.
    pub fn descriptor(mut self, descriptor: PropertyDescriptor<E, P, V>) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDescriptor<E, P, V>> {
        self.descriptors.iter()
    }

    /// Identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &P> {
        self.descriptors.iter().map(PropertyDescriptor::id)
    }
}

impl<E: 'static, P, V: 'static> PropertySet<E, P, V> {
    /// Declare a property with a total extraction function.
    pub fn property<F>(self, id: P, extract: F) -> Self
    where
        F: Fn(&E) -> V + Send + Sync + 'static,
    {
        self.descriptor(PropertyDescriptor::new(id, extract))
    }

    /// Declare a property whose extraction function may fail.
    pub fn fallible_property<F, X>(self, id: P, extract: F) -> Self
    where
        F: Fn(&E) -> std::result::Result<V, X> + Send + Sync + 'static,
        X: Into<BoxError>,
    {
        self.descriptor(PropertyDescriptor::fallible(id, extract))
    }
}

impl<E: 'static, P> PropertySet<E, P, P::Value>
where
    P: SearchableProperty<E>,
    P::Value: 'static,
{
    /// One descriptor per enum variant, in declaration order.
    pub fn from_enum() -> Self {
        P::variants()
            .iter()
            .fold(Self::new(), |set, &variant| {
                set.property(variant, move |element: &E| variant.extract(element))
            })
    }
}

impl<E, P, V> PropertySet<E, P, V>
where
    P: Eq + Hash + Clone + fmt::Debug,
{
    /// Map every identifier to its declaration position.
    ///
    /// Fails when the set is empty or an identifier is declared twice.
    pub(crate) fn positions(&self) -> Result<HashMap<P, usize>> {
        if self.descriptors.is_empty() {
            return Err(CollectionError::Configuration(
                "at least one searchable property is required".to_string(),
            ));
        }

        let mut positions = HashMap::with_capacity(self.descriptors.len());
        for (position, descriptor) in self.descriptors.iter().enumerate() {
            if positions.insert(descriptor.id().clone(), position).is_some() {
                return Err(CollectionError::Configuration(format!(
                    "property {:?} is declared more than once",
                    descriptor.id()
                )));
            }
        }
        Ok(positions)
    }
}

impl<E, P, V> Default for PropertySet<E, P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P: Clone, V> Clone for PropertySet<E, P, V> {
    fn clone(&self) -> Self {
        Self {
            descriptors: self.descriptors.clone(),
        }
    }
}

impl<E, P: fmt::Debug, V> fmt::Debug for PropertySet<E, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

impl<'a, E, P, V> IntoIterator for &'a PropertySet<E, P, V> {
    type Item = &'a PropertyDescriptor<E, P, V>;
    type IntoIter = std::slice::Iter<'a, PropertyDescriptor<E, P, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
