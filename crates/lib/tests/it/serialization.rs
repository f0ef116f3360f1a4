//! Serialization tests: serde round trips and serde_json interop.

use pathmap::{PathMap, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_serde_round_trip() {
    let mut map = nested_fixture();
    map.set("list", vec![Value::from(1), Value::from("two")]);
    map.set("flag", true);
    map.set("ratio", 0.25);
    map.set("nothing", Value::Null);

    let json = serde_json::to_string(&map).unwrap();
    let back: PathMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_serializes_as_plain_json_object() {
    let map = PathMap::new().with("a.b", 1).with("c", "x");
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(json, json!({"a": {"b": 1}, "c": "x"}));
}

mod json_conversion {
    use super::*;

    #[test]
    fn test_from_json_object() -> pathmap::Result<()> {
        let map = PathMap::from_json(json!({
            "a": {"b": {"c": 3, "d": 4}, "e": 5},
            "tags": ["x", "y"],
            "pi": 3.5,
            "none": null
        }))?;

        assert_eq!(
            sorted_keys(&map),
            vec!["a.b.c", "a.b.d", "a.e", "none", "pi", "tags"]
        );
        assert_int_at(&map, "a.b.c", 3);
        assert_eq!(map.get_as::<f64>("pi"), Some(3.5));
        assert!(map.get("none").unwrap().is_null());
        Ok(())
    }

    #[test]
    fn test_from_json_keeps_dotted_keys_literal() -> pathmap::Result<()> {
        let map = PathMap::from_json(json!({"a.b": 1}))?;
        assert_eq!(map.len(), 1);
        assert!(map.get("a.b").is_none());
        assert!(map.as_hashmap().contains_key("a.b"));
        Ok(())
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let err = PathMap::from_json(json!([1, 2])).unwrap_err();
        assert!(err.is_type_error());

        match err {
            pathmap::Error::PathMap(pathmap::PathMapError::NotAnObject { actual }) => {
                assert_eq!(actual, "list");
            }
            other => panic!("Expected NotAnObject, got: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_str_reports_parse_errors() {
        let err = PathMap::from_json_str("{not json").unwrap_err();
        assert!(err.is_serialization_error());
        assert_eq!(err.module(), "serialize");
    }

    #[test]
    fn test_to_json_round_trip() -> pathmap::Result<()> {
        let source = json!({"server": {"port": 8080, "hosts": ["a", "b"]}, "debug": false});
        let map = PathMap::from_json_str(&source.to_string())?;
        assert_eq!(map.to_json(), source);
        Ok(())
    }

    #[test]
    fn test_raw_hashmap_access_keeps_keys_literal() {
        let mut raw = std::collections::HashMap::new();
        raw.insert("x.y".to_string(), Value::from(1));
        let map = PathMap::from_hashmap(raw);

        assert!(map.get("x.y").is_none());
        let back = map.into_hashmap();
        assert_eq!(back.get("x.y"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        let json: serde_json::Value = Value::Float(f64::NAN).into();
        assert!(json.is_null());
    }
}
