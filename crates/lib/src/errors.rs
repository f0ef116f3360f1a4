//! Error types for path-addressed map operations.
//!
//! The core operations (`set`, `get`, `delete`, `flattened_keys`) never fail.
//! These errors come from the stricter or conversion-oriented entry points:
//! [`PathMap::try_set`](crate::PathMap::try_set), typed retrieval through
//! `TryFrom<&Value>`, component validation and JSON import.

use thiserror::Error;

/// Structured errors for [`PathMap`](crate::PathMap) and [`Value`](crate::Value).
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathMapError {
    /// A strict set would have to descend through a value that is not a map.
    #[error("Path conflict at '{path}': segment '{segment}' holds a {found}, not a map")]
    PathConflict {
        path: String,
        segment: String,
        found: String,
    },

    /// A value could not be converted to the requested type.
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A path component contained the separator.
    #[error("Invalid component '{component}': components cannot contain dots")]
    InvalidComponent { component: String },

    /// JSON import was given something other than an object.
    #[error("Expected a JSON object at the root, found {actual}")]
    NotAnObject { actual: String },
}

impl PathMapError {
    /// Check if this error is a path conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PathMapError::PathConflict { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            PathMapError::TypeMismatch { .. } | PathMapError::NotAnObject { .. }
        )
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            PathMapError::PathConflict { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<PathMapError> for crate::Error {
    fn from(err: PathMapError) -> Self {
        crate::Error::PathMap(err)
    }
}
