//! Tests for deleting values by path, including pruning of emptied ancestors.

use pathmap::{PathMap, Value};

use crate::helpers::*;

#[test]
fn test_delete_simple_key() {
    let mut map = PathMap::new().with("a", 1).with("b", 2);

    assert!(map.delete("a"));
    assert_eq!(map, PathMap::new().with("b", 2));
}

#[test]
fn test_delete_nested_key_keeps_siblings() {
    let mut map = nested_fixture();

    assert!(map.delete("a.b.c"));

    let expected = PathMap::new().with("a.b.d", 4).with("a.e", 5);
    assert_eq!(map, expected);
}

#[test]
fn test_delete_missing_key_leaves_map_unchanged() {
    let mut map = nested_fixture();
    let before = map.clone();

    assert!(!map.delete("a.b.x"));
    assert!(!map.delete("x.y.z"));
    assert!(!map.delete("a.e.f")); // intermediate is a scalar
    assert!(!map.delete(""));
    assert_eq!(map, before);
}

#[test]
fn test_delete_subtree() {
    let mut map = nested_fixture().with("f", 6);

    assert!(map.delete("a"));
    assert_eq!(map, PathMap::new().with("f", 6));
}

#[test]
fn test_delete_then_absent() {
    let mut map = nested_fixture();

    for path in ["a.b.c", "a.e", "a.b.d"] {
        assert!(map.delete(path), "Expected '{path}' to be deleted");
        assert!(map.get(path).is_none(), "'{path}' still present");
        assert!(!map.delete(path), "Second delete of '{path}' succeeded");
    }
}

#[test]
fn test_delete_prunes_empty_ancestors() {
    let mut map = PathMap::new();
    map.set("a.b.c", 1);

    assert!(map.delete("a.b.c"));
    assert!(map.is_empty());
    assert!(map.get("a").is_none());
}

#[test]
fn test_pruning_stops_at_first_non_empty_ancestor() {
    let mut map = PathMap::new();
    map.set("a.b.c.d", 1);
    map.set("a.x", 2);

    assert!(map.delete("a.b.c.d"));

    // `c` and `b` became empty and were pruned; `a` still holds `x`
    assert!(map.get("a.b").is_none());
    assert_eq!(map.get_map("a").unwrap().len(), 1);
    assert_int_at(&map, "a.x", 2);
}

#[test]
fn test_pruning_ignores_unrelated_empty_maps() {
    let mut map = PathMap::new();
    map.set("a.keep", PathMap::new());
    map.set("a.b.c", 1);

    assert!(map.delete("a.b.c"));

    // `b` is pruned, but `a` still holds the pre-existing empty `keep`
    assert!(map.get("a.b").is_none());
    assert_eq!(map.get_map("a.keep"), Some(&PathMap::new()));
}

#[test]
fn test_root_is_never_removed() {
    let mut map = PathMap::new().with("only", 1);

    assert!(map.delete("only"));
    assert!(map.is_empty());

    map.set("again", 2);
    assert_int_at(&map, "again", 2);
}

#[test]
fn test_delete_empty_map_value() {
    let mut map = PathMap::new();
    map.set("a.empty", PathMap::new());

    assert!(map.delete("a.empty"));
    assert!(map.is_empty());
}

#[test]
fn test_remove_returns_value() {
    let mut map = PathMap::new();
    map.set("a.list", vec![Value::from(1), Value::from(2)]);

    let removed = map.remove("a.list");
    assert_eq!(removed, Some(Value::from(vec![Value::from(1), Value::from(2)])));
    assert!(map.is_empty());
    assert_eq!(map.remove("a.list"), None);
}

#[test]
fn test_delete_with_empty_segments() {
    let mut map = PathMap::new();
    map.set("a..b", 1);

    assert!(!map.delete("a.b"));
    assert!(map.delete("a..b"));
    assert!(map.is_empty());
}
