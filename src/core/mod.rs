pub mod error;
pub mod value;

pub use error::{BoxError, CollectionError, Result};
pub use value::Value;
