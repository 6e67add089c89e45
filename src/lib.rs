// ============================================================================
// multiprop Library
// ============================================================================

//! In-memory collection with hash-indexed equality lookup by several
//! predeclared properties.
//!
//! ```
//! use multiprop::{IndexedCollection, PropertyEnum, Value};
//!
//! struct Item {
//!     color: &'static str,
//!     weight: i64,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PropertyEnum)]
//! #[searchable(element = Item)]
//! enum ItemProperty {
//!     #[searchable(extract = |item: &Item| item.color)]
//!     Color,
//!     #[searchable(extract = |item: &Item| item.weight)]
//!     Weight,
//! }
//!
//! # fn main() -> multiprop::Result<()> {
//! let mut items = IndexedCollection::<Item, ItemProperty>::from_enum()?;
//! items.add_element(Item { color: "red", weight: 1 })?;
//! items.add_element(Item { color: "blue", weight: 1 })?;
//!
//! assert_eq!(items.search_by_property(&ItemProperty::Weight, &Value::from(1i64)).len(), 2);
//! # Ok(())
//! # }
//! ```

extern crate self as multiprop;

pub mod collection;
pub mod core;
pub mod property;
pub mod shared;

pub use crate::collection::{CollectionStats, IndexedCollection, Matches, PropertyStats};
pub use crate::core::{BoxError, CollectionError, Result, Value};
pub use crate::property::{PropertyDescriptor, PropertyEnum, PropertySet, SearchableProperty};
pub use crate::shared::SharedCollection;

pub use multiprop_derive::PropertyEnum;
