//! Path types for addressing nested entries in a [`PathMap`](crate::PathMap).
//!
//! Paths are dot-separated strings such as `"server.tls.cert"`. The
//! [`Path`]/[`PathBuf`] pair follows the same borrowed/owned pattern as
//! `std::path::Path`/`std::path::PathBuf`.
//!
//! Paths are taken literally. There is no normalization and no escaping:
//! `"a..b"` has the three segments `a`, `""` and `b`, and the empty string
//! is a path with a single empty segment. A segment can never contain a dot.
//!
//! # Usage
//!
//! ```rust
//! use pathmap::{PathBuf, PathMap, path};
//!
//! // Any string is a path
//! let mut map = PathMap::new();
//! map.set("user.profile.name", "Alice");
//!
//! // Build one incrementally
//! let name = PathBuf::new().push("user").push("profile").push("name");
//! assert_eq!(name.as_str(), "user.profile.name");
//!
//! // Or with the macro
//! assert_eq!(map.get(path!("user", "profile", "name")), map.get(&name));
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use crate::errors::PathMapError;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A validated single segment of a path.
///
/// Components may be empty but cannot contain the separator.
///
/// ```rust
/// # use pathmap::Component;
/// assert!(Component::new("user").is_ok());
/// assert!(Component::new("").is_ok());
/// assert!(Component::new("user.name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a new component.
    ///
    /// # Errors
    /// Returns [`PathMapError::InvalidComponent`] if `s` contains a dot.
    pub fn new(s: impl Into<String>) -> Result<Self, PathMapError> {
        let s = s.into();
        if s.contains(SEPARATOR) {
            return Err(PathMapError::InvalidComponent { component: s });
        }
        Ok(Component { inner: s })
    }

    /// Returns the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl FromStr for Component {
    type Err = PathMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = PathMapError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

impl TryFrom<String> for Component {
    type Error = PathMapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

/// A borrowed path.
///
/// This type is unsized and always used behind a reference, like `str`.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Wraps a string slice as a path. Every string is a valid path.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns an iterator over the segments, including empty ones.
    ///
    /// There is always at least one segment.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split(SEPARATOR)
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Splits off the final segment.
    ///
    /// Returns the parent path (`None` for a single-segment path) and the
    /// last segment.
    ///
    /// ```rust
    /// # use pathmap::Path;
    /// let (parent, last) = Path::new("a.b.c").split_last();
    /// assert_eq!(parent.map(Path::as_str), Some("a.b"));
    /// assert_eq!(last, "c");
    ///
    /// let (parent, last) = Path::new("a").split_last();
    /// assert!(parent.is_none());
    /// assert_eq!(last, "a");
    /// ```
    pub fn split_last(&self) -> (Option<&Path>, &str) {
        match self.inner.rsplit_once(SEPARATOR) {
            Some((parent, last)) => (Some(Path::new(parent)), last),
            None => (None, &self.inner),
        }
    }

    /// Returns the parent path, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<&Path> {
        self.split_last().0
    }

    /// Returns the last segment.
    pub fn last(&self) -> &str {
        self.split_last().1
    }

    /// Converts to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl PathBuf {
    /// Creates an empty path buffer.
    ///
    /// The first [`push`](Self::push) replaces the empty contents rather than
    /// appending to an empty leading segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path by joining segments with the separator.
    ///
    /// Segments are joined as given, so a segment containing a dot adds more
    /// than one level.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                inner.push(SEPARATOR);
            }
            inner.push_str(segment.as_ref());
        }
        Self { inner }
    }

    /// Appends a path (one or more segments) to the end of this one.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        if !self.inner.is_empty() {
            self.inner.push(SEPARATOR);
        }
        self.inner.push_str(path.as_ref());
        self
    }

    /// Appends a validated component.
    pub fn push_component(self, component: Component) -> Self {
        self.push(component.inner)
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        self.push(other.as_ref().as_str())
    }

    /// Consumes the buffer, returning the underlying string.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<Component> for PathBuf {
    fn from(component: Component) -> Self {
        Self {
            inner: component.inner,
        }
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Constructs a path.
///
/// - `path!("a.b.c")` - a single literal, returns `&'static Path`
/// - `path!("a", "b", "c")` - several segments, returns `PathBuf`
/// - `path!(base, "b")` - runtime values are formatted with `ToString`
///
/// ```rust
/// # use pathmap::path;
/// let key = "profile";
/// assert_eq!(path!("user", key, "name").as_str(), "user.profile.name");
/// assert_eq!(path!("user.profile.name").as_str(), "user.profile.name");
/// ```
#[macro_export]
macro_rules! path {
    ($single:literal) => {
        $crate::Path::new($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::PathBuf::from_segments([$first.to_string() $(, $rest.to_string())*])
    };
}
