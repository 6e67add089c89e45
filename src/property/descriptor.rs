use crate::core::{BoxError, CollectionError, Result};
use std::fmt;
use std::sync::Arc;

type Extractor<E, V> = Arc<dyn Fn(&E) -> std::result::Result<V, BoxError> + Send + Sync>;

/// One searchable dimension: a stable identifier plus its extraction function.
///
/// Descriptors are immutable. The extractor sits behind an `Arc`, so cloning
/// a descriptor (or a whole [`PropertySet`](super::PropertySet)) is cheap.
pub struct PropertyDescriptor<E, P, V> {
    id: P,
    extractor: Extractor<E, V>,
}

impl<E: 'static, P, V: 'static> PropertyDescriptor<E, P, V> {
    /// Descriptor with a total extraction function.
    pub fn new<F>(id: P, extract: F) -> Self
    where
        F: Fn(&E) -> V + Send + Sync + 'static,
    {
        let extractor: Extractor<E, V> =
            Arc::new(move |element: &E| Ok::<V, BoxError>(extract(element)));
        Self { id, extractor }
    }

    /// Descriptor whose extraction function may fail.
    ///
    /// The caller's error is carried unchanged as the `source` of
    /// [`CollectionError::Extraction`].
    pub fn fallible<F, X>(id: P, extract: F) -> Self
    where
        F: Fn(&E) -> std::result::Result<V, X> + Send + Sync + 'static,
        X: Into<BoxError>,
    {
        let extractor: Extractor<E, V> =
            Arc::new(move |element: &E| extract(element).map_err(Into::<BoxError>::into));
        Self { id, extractor }
    }
}

impl<E, P, V> PropertyDescriptor<E, P, V> {
    pub fn id(&self) -> &P {
        &self.id
    }
}

impl<E, P: fmt::Debug, V> PropertyDescriptor<E, P, V> {
    pub(crate) fn extract(&self, element: &E) -> Result<V> {
        (self.extractor)(element)
            .map_err(|source| CollectionError::extraction(property_label(&self.id), source))
    }
}

/// Human-readable name of a property identifier: its `Debug` form, with the
/// surrounding quotes dropped for string identifiers.
pub(crate) fn property_label<P: fmt::Debug>(id: &P) -> String {
    let label = format!("{:?}", id);
    match label.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(unquoted) => unquoted.to_string(),
        None => label,
    }
}

impl<E, P: Clone, V> Clone for PropertyDescriptor<E, P, V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<E, P: fmt::Debug, V> fmt::Debug for PropertyDescriptor<E, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parcel {
        label: &'static str,
        grams: Option<i64>,
    }

    #[test]
    fn test_total_extractor() {
        let descriptor = PropertyDescriptor::new("label", |p: &Parcel| p.label.to_string());
        let parcel = Parcel { label: "fragile", grams: None };

        assert_eq!(descriptor.id(), &"label");
        assert_eq!(descriptor.extract(&parcel).unwrap(), "fragile");
    }

    #[test]
    fn test_fallible_extractor_reports_property() {
        let descriptor = PropertyDescriptor::fallible("grams", |p: &Parcel| {
            p.grams.ok_or("parcel was never weighed")
        });
        let parcel = Parcel { label: "x", grams: None };

        let err = descriptor.extract(&parcel).unwrap_err();
        match err {
            CollectionError::Extraction { property, source } => {
                assert_eq!(property, "grams");
                assert_eq!(source.to_string(), "parcel was never weighed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_property_label_unquotes_string_ids() {
        #[derive(Debug)]
        enum Dimension {
            Depth,
        }

        assert_eq!(property_label(&"grams"), "grams");
        assert_eq!(property_label(&String::from("label")), "label");
        assert_eq!(property_label(&Dimension::Depth), "Depth");
        assert_eq!(property_label(&7u8), "7");
    }
}
