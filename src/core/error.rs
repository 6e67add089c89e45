use thiserror::Error;

/// Boxed error returned by fallible extraction functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Extraction of property '{property}' failed: {source}")]
    Extraction {
        /// `Debug` form of the property identifier, unquoted for string ids.
        property: String,
        #[source]
        source: BoxError,
    },

    #[error("Lock error: {0}")]
    LockError(String),
}

impl CollectionError {
    pub(crate) fn extraction(property: impl Into<String>, source: BoxError) -> Self {
        Self::Extraction {
            property: property.into(),
            source,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, Self::Extraction { .. })
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;

impl<T> From<std::sync::PoisonError<T>> for CollectionError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}
