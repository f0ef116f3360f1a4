//!
//! pathmap: a nested string-keyed map addressed with dotted paths.
//!
//! ## Core Concepts
//!
//! * **Maps (`PathMap`)**: A mapping from string keys to values, where a value may itself be a
//!   map. Every child map is exclusively owned by its parent, so the structure is a tree.
//! * **Paths (`Path`, `PathBuf`)**: Dot-separated strings such as `"a.b.c"` addressing a location
//!   in the tree, one segment per level. Segments are taken literally; there is no escaping.
//! * **Values (`Value`)**: Leaves (null, bool, int, float, text, lists) or nested maps. Setting a
//!   map onto a map merges shallowly, setting a list onto a list appends.
//! * **Pruning**: Deleting the last entry of a nested map removes that map from its parent, and so
//!   on upward, so deletes never leave empty branches behind.
//!
//! ```
//! use pathmap::PathMap;
//!
//! let mut map = PathMap::new();
//! map.set("server.tls.cert", "/etc/cert.pem");
//! assert_eq!(map.get_as::<&str>("server.tls.cert"), Some("/etc/cert.pem"));
//!
//! assert!(map.delete("server.tls.cert"));
//! assert!(map.is_empty());
//! ```

pub mod errors;
pub mod map;
pub mod path;
pub mod value;

pub use errors::PathMapError;
pub use map::PathMap;
pub use path::{Component, Path, PathBuf};
pub use value::Value;

/// Result type used throughout the pathmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from map and value operations
    #[error(transparent)]
    PathMap(PathMapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::PathMap(_) => "map",
        }
    }

    /// Check if this error is a path conflict from a strict set.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::PathMap(err) => err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::PathMap(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from JSON parsing or encoding.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
