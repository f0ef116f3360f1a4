//! The path-addressable map.
//!
//! [`PathMap`] is a string-keyed map whose values may themselves be maps,
//! addressed with dotted paths. It supports four core operations:
//!
//! - [`PathMap::set`] writes a value, creating intermediate maps as needed and
//!   merging with whatever is already stored at the final key
//! - [`PathMap::get`] reads a value
//! - [`PathMap::delete`] removes a value and prunes ancestors left empty
//! - [`PathMap::flattened_keys`] lists the dotted path of every leaf
//!
//! # Usage
//!
//! ```
//! use pathmap::{PathMap, Value};
//!
//! let mut map = PathMap::new();
//! map.set("a.b.c", 3);
//! map.set("a.b.d", 4);
//! map.set("a.e", 5);
//!
//! assert_eq!(map.get("a.b.c"), Some(&Value::Int(3)));
//!
//! let mut keys = map.flattened_keys();
//! keys.sort();
//! assert_eq!(keys, vec!["a.b.c", "a.b.d", "a.e"]);
//!
//! assert!(map.delete("a.e"));
//! assert!(map.delete("a.b.c"));
//! assert!(map.delete("a.b.d"));
//! assert!(map.is_empty()); // `a.b` and `a` were pruned
//! ```
//!
//! The map is a plain single-threaded data structure. Wrap it in a lock to
//! share it between threads.

use std::{collections::HashMap, fmt};

use tracing::{debug, trace};

use crate::{Path, Value, errors::PathMapError};

/// A map of string keys to [`Value`]s, addressable by dotted paths.
///
/// Every child map is owned exclusively by its parent, so the structure is
/// always a tree.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PathMap {
    children: HashMap<String, Value>,
}

impl PathMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing map of direct children. Keys are taken as-is, not
    /// as paths.
    pub fn from_hashmap(children: HashMap<String, Value>) -> Self {
        Self { children }
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if there are no direct keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if a value exists at the given path
    pub fn contains_path(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Sets a value at the given path.
    ///
    /// Intermediate maps are created as needed. An intermediate segment that
    /// holds something other than a map is replaced by a new empty map, and
    /// the old value is lost; use [`try_set`](Self::try_set) to refuse that
    /// instead.
    ///
    /// The value is merged into whatever already sits at the final segment
    /// according to [`Value::merge`]: maps are shallow-merged, lists are
    /// appended, anything else is replaced.
    ///
    /// ```
    /// # use pathmap::{PathMap, Value};
    /// let mut map = PathMap::new();
    /// map.set("tags", vec![Value::from("a")]);
    /// map.set("tags", vec![Value::from("b")]);
    /// assert_eq!(map.get_as::<Vec<Value>>("tags").unwrap().len(), 2);
    /// ```
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) {
        let (parent, last) = path.as_ref().split_last();

        let mut current = self;
        for segment in parent.into_iter().flat_map(Path::components) {
            current = current.child_mut(segment);
        }
        current.merge_at(last, value.into());
    }

    /// Sets a value at the given path, refusing to overwrite non-map
    /// intermediates.
    ///
    /// # Errors
    /// Returns [`PathMapError::PathConflict`] naming the first intermediate
    /// segment that holds a non-map value. The map is left unchanged.
    pub fn try_set(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> crate::Result<()> {
        let path = path.as_ref();
        let (parent, _) = path.split_last();

        let mut current = &*self;
        for segment in parent.into_iter().flat_map(Path::components) {
            match current.children.get(segment) {
                None => break,
                Some(Value::Map(child)) => current = child,
                Some(other) => {
                    return Err(PathMapError::PathConflict {
                        path: path.as_str().to_string(),
                        segment: segment.to_string(),
                        found: other.type_name().to_string(),
                    }
                    .into());
                }
            }
        }

        self.set(path, value);
        Ok(())
    }

    /// Gets the value at the given path.
    ///
    /// Returns `None` if any intermediate segment is missing or not a map, or
    /// if the final key is absent.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let (parent, last) = path.as_ref().split_last();

        let mut current = self;
        for segment in parent.into_iter().flat_map(Path::components) {
            current = current.children.get(segment)?.as_map()?;
        }
        current.children.get(last)
    }

    /// Gets a mutable reference to the value at the given path
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        let (parent, last) = path.as_ref().split_last();

        let mut current = self;
        for segment in parent.into_iter().flat_map(Path::components) {
            current = current.children.get_mut(segment)?.as_map_mut()?;
        }
        current.children.get_mut(last)
    }

    /// Gets a value with automatic type conversion using `TryFrom`.
    ///
    /// Returns `None` if the path is absent or the conversion fails.
    ///
    /// ```
    /// # use pathmap::PathMap;
    /// let mut map = PathMap::new();
    /// map.set("user.name", "Alice");
    /// map.set("user.age", 30);
    ///
    /// assert_eq!(map.get_as::<&str>("user.name"), Some("Alice"));
    /// assert_eq!(map.get_as::<i64>("user.age"), Some(30));
    /// assert_eq!(map.get_as::<i64>("user.name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = PathMapError>,
    {
        T::try_from(self.get(path)?).ok()
    }

    /// Gets the nested map at the given path
    pub fn get_map(&self, path: impl AsRef<Path>) -> Option<&PathMap> {
        self.get(path)?.as_map()
    }

    /// Deletes the value at the given path.
    ///
    /// Returns true if a value was found and removed. See
    /// [`remove`](Self::remove) for the pruning behavior.
    pub fn delete(&mut self, path: impl AsRef<Path>) -> bool {
        self.remove(path).is_some()
    }

    /// Removes and returns the value at the given path.
    ///
    /// After removal, ancestor maps that became empty are removed from their
    /// parents, deepest first, stopping at the first one that still has
    /// entries. The map this is called on is never removed. If the path does
    /// not resolve, nothing changes.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let segments: Vec<&str> = path.as_ref().components().collect();
        self.remove_segments(&segments)
    }

    fn remove_segments(&mut self, segments: &[&str]) -> Option<Value> {
        match segments {
            [] => None,
            [last] => self.children.remove(*last),
            [head, rest @ ..] => {
                let child = self.children.get_mut(*head)?.as_map_mut()?;
                let removed = child.remove_segments(rest)?;
                if child.is_empty() {
                    trace!(segment = %head, "Pruning empty map");
                    self.children.remove(*head);
                }
                Some(removed)
            }
        }
    }

    /// Returns the dotted path of every leaf value.
    ///
    /// Nested maps are descended into and contribute only their leaves, so
    /// an empty nested map contributes nothing. The order is unspecified.
    pub fn flattened_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.children.len());
        let mut prefix = String::new();
        self.collect_keys(&mut prefix, true, &mut keys);
        keys
    }

    fn collect_keys(&self, prefix: &mut String, at_root: bool, keys: &mut Vec<String>) {
        for (key, value) in &self.children {
            let mark = prefix.len();
            if !at_root {
                prefix.push(crate::path::SEPARATOR);
            }
            prefix.push_str(key);

            match value {
                Value::Map(child) => child.collect_keys(prefix, false, keys),
                _ => keys.push(prefix.clone()),
            }

            prefix.truncate(mark);
        }
    }

    /// Returns an iterator over the direct key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns an iterator over the direct keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over the direct values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    /// Get a reference to the internal HashMap for advanced access
    pub fn as_hashmap(&self) -> &HashMap<String, Value> {
        &self.children
    }

    /// Consumes the map, returning the internal HashMap
    pub fn into_hashmap(self) -> HashMap<String, Value> {
        self.children
    }

    /// Copies `other`'s direct entries over this map's, one level deep.
    pub(crate) fn merge_shallow(&mut self, other: PathMap) {
        self.children.extend(other.children);
    }

    /// Returns the child map at `segment`, creating it if missing and
    /// replacing any non-map value.
    fn child_mut(&mut self, segment: &str) -> &mut PathMap {
        let slot = self
            .children
            .entry(segment.to_string())
            .or_insert_with(|| Value::Map(PathMap::new()));

        if !slot.is_map() {
            debug!(
                segment,
                replaced = slot.type_name(),
                "Replacing non-map intermediate with an empty map"
            );
            *slot = Value::Map(PathMap::new());
        }

        match slot {
            Value::Map(map) => map,
            _ => unreachable!("slot holds a map"),
        }
    }

    fn merge_at(&mut self, key: &str, value: Value) {
        match self.children.get_mut(key) {
            Some(existing) => existing.merge(value),
            None => {
                self.children.insert(key.to_string(), value);
            }
        }
    }
}

// JSON interop
impl PathMap {
    /// Builds a map from a JSON value, which must be an object.
    ///
    /// Object keys are taken as-is; a key containing a dot becomes a single
    /// entry that dotted paths cannot reach.
    ///
    /// # Errors
    /// Returns [`PathMapError::NotAnObject`] for any other JSON value.
    pub fn from_json(json: serde_json::Value) -> crate::Result<Self> {
        match Value::from(json) {
            Value::Map(map) => Ok(map),
            other => Err(PathMapError::NotAnObject {
                actual: other.type_name().to_string(),
            }
            .into()),
        }
    }

    /// Parses a JSON document into a map.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(value)
    }

    /// Converts the map into a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        Value::Map(self.clone()).into()
    }
}

impl fmt::Display for PathMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Collects `(path, value)` pairs through [`PathMap::set`], so paths are
/// expanded and repeated paths merge.
impl<K: AsRef<Path>, V: Into<Value>> FromIterator<(K, V)> for PathMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = PathMap::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<Path>, V: Into<Value>> Extend<(K, V)> for PathMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (path, value) in iter {
            self.set(path, value);
        }
    }
}

impl<'a> IntoIterator for &'a PathMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
