//! Shared helpers for the integration tests.

use pathmap::{PathMap, Value};

/// Builds the nested fixture `{a: {b: {c: 3, d: 4}, e: 5}}`.
pub fn nested_fixture() -> PathMap {
    let mut map = PathMap::new();
    map.set("a.b.c", 3);
    map.set("a.b.d", 4);
    map.set("a.e", 5);
    map
}

/// Returns the flattened keys of `map`, sorted.
pub fn sorted_keys(map: &PathMap) -> Vec<String> {
    let mut keys = map.flattened_keys();
    keys.sort();
    keys
}

/// Asserts that the value at `path` is the given integer.
pub fn assert_int_at(map: &PathMap, path: &str, expected: i64) {
    match map.get(path) {
        Some(Value::Int(actual)) => {
            assert_eq!(*actual, expected, "Value mismatch at path '{path}'")
        }
        Some(other) => panic!("Expected int at path '{path}', got: {other:?}"),
        None => panic!("Path '{path}' not found in map"),
    }
}

/// Builds a list value from integers.
pub fn int_list(items: &[i64]) -> Value {
    Value::List(items.iter().copied().map(Value::Int).collect())
}
