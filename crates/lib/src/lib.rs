//!
//! dotpath: read, write, enumerate and merge nested data through dot-delimited paths.
//!
//! The crate operates on already-materialized aggregates whose shape is only known at
//! runtime, such as decoded documents, configuration blobs or heterogeneous records.
//!
//! ## Core Concepts
//!
//! * **Paths (`path::Path`)**: Dot-delimited addresses like `"server.tls.cert"`. A literal dot
//!   inside a segment is written `\.`.
//! * **Values (`value::Value`)**: The dynamic value model: scalars, mappings ([`Map`]),
//!   sequences and records.
//! * **Records (`record::Record`)**: Fixed-field structures exposed through an explicit
//!   capability trait. The [`impl_record!`] macro generates adapters for plain structs.
//! * **Resolution (`resolve`)**: [`get`] with multi-candidate fallback, the coercing getters
//!   [`get_string`], [`get_int64`] and [`get_float64`], and [`set`] which creates missing
//!   intermediate mappings on the way down.
//! * **Enumeration (`keys`)**: [`keys`], [`keys_recursive`] and [`keys_recursive_leaves`].
//! * **Merging (`extend`)**: [`extend`] copies every meaningful (non-default) leaf of one
//!   aggregate into another.
//!
//! ## Example
//!
//! ```
//! use dotpath::{Map, Value, get, get_string, set};
//!
//! let mut config = Value::from(Map::new());
//! set(&mut config, "server.port", 8080)?;
//! set(&mut config, "server.host", "localhost")?;
//!
//! assert_eq!(get(&config, ["server.port"])?, Some(Value::Int(8080)));
//! assert_eq!(get_string(&config, ["server.name", "server.host"]), "localhost");
//! # Ok::<(), dotpath::Error>(())
//! ```

pub mod access;
pub mod coerce;
pub mod constants;
pub mod extend;
#[cfg(feature = "json")]
pub mod json;
pub mod keys;
pub mod map;
pub mod path;
pub mod record;
pub mod resolve;
pub mod value;

pub use access::{AccessError, Node, Slot};
pub use extend::extend;
pub use keys::{keys, keys_recursive, keys_recursive_leaves};
pub use map::Map;
pub use path::{Path, PathError};
pub use record::{FieldValue, Record};
pub use resolve::{get, get_float64, get_int64, get_string, set, set_path};
pub use value::Value;

/// Result type used throughout the dotpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured access errors from the access module
    #[error(transparent)]
    Access(access::AccessError),

    /// Encoding or decoding through the JSON bridge failed
    #[error("Serialization error: {0}")]
    Serialize(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Access(_) => "access",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a field or key could not be found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error was caused by a malformed path.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error rejected a write.
    pub fn is_write_rejected(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_write_rejected(),
            _ => false,
        }
    }

    /// Check if this error is access-related.
    pub fn is_access_error(&self) -> bool {
        matches!(self, Error::Access(_))
    }
}
