//! Searchable property declarations.
//!
//! A property is an identifier paired with an extraction function that maps
//! an element to the value it is indexed under. Properties are declared either
//! one by one through [`PropertySet`] or all at once from a fieldless enum
//! implementing [`SearchableProperty`].

pub mod descriptor;
pub mod set;

pub use descriptor::PropertyDescriptor;
pub(crate) use descriptor::property_label;
pub use set::PropertySet;

use std::fmt::Debug;
use std::hash::Hash;

/// A finite, ordered enumeration of property identifiers.
///
/// Usually derived with `#[derive(PropertyEnum)]`, which only accepts enums
/// whose variants carry no fields.
pub trait PropertyEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// All variants in declaration order.
    fn variants() -> &'static [Self];
}

/// An enumeration whose variants know how to extract their value from `E`.
pub trait SearchableProperty<E>: PropertyEnum {
    type Value: Eq + Hash;

    fn extract(&self, element: &E) -> Self::Value;
}
