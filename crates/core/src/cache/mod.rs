mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::employee_key;
pub use serialization::{deserialize_view, serialize_view, SerializationError};
pub use traits::Cache;
