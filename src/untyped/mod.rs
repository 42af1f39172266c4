pub mod path;

use crate::document::{QUUX_NUMS, QUUX_STUFF};
use crate::error::{Error, Result};
use path::JsonPath;
use serde_json::{Value, json};

/// Path of the color printed by the untyped run
pub(crate) fn paint_path(index: usize) -> JsonPath {
    JsonPath::root()
        .append("foo")
        .append("bar")
        .index(index)
        .append("paint")
}

pub(crate) fn decode_value(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(Error::Decode)
}

/// String stored at `path`
pub(crate) fn read_str<'a>(json: &'a Value, path: &JsonPath) -> Result<&'a str> {
    path.lookup(json)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Path {
            path: path.to_string(),
        })
}

/// Set `quux` on the root object, replacing any previous value
///
/// Root rather than under `foo`, so the output matches the typed [`crate::Document`].
pub(crate) fn insert_quux(json: &mut Value) -> Result<()> {
    let quux = json!({
        "stuff": QUUX_STUFF,
        "nums": QUUX_NUMS,
    });

    match JsonPath::root().lookup_mut(json) {
        Some(Value::Object(map)) => {
            map.insert("quux".to_string(), quux);
            Ok(())
        }
        _ => Err(Error::Path {
            path: JsonPath::root().append("quux").to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_str_on_fixed_input() {
        let input = decode_value(crate::INPUT).unwrap();
        assert_eq!(read_str(&input, &paint_path(1)).unwrap(), "green");
    }

    #[test]
    fn test_read_str_rejects_missing_and_non_string() {
        let input = json!({"foo": {"bar": [{"paint": 1}]}});

        let err = read_str(&input, &paint_path(0)).unwrap_err();
        assert!(matches!(err, Error::Path { ref path } if path == "/foo/bar/0/paint"));

        let err = read_str(&input, &paint_path(1)).unwrap_err();
        assert!(matches!(err, Error::Path { ref path } if path == "/foo/bar/1/paint"));
    }

    #[test]
    fn test_insert_quux_at_root_keeps_key_order() {
        let mut input = json!({"foo": {"bar": []}});
        insert_quux(&mut input).unwrap();

        let expected = json!({
            "foo": {"bar": []},
            "quux": {"stuff": "nonsense", "nums": [2.718, 3.142]}
        });
        assert_eq!(input, expected);

        let keys: Vec<&String> = input.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["foo", "quux"]);
        let quux_keys: Vec<&String> = input["quux"].as_object().unwrap().keys().collect();
        assert_eq!(quux_keys, ["stuff", "nums"]);
    }

    #[test]
    fn test_insert_quux_needs_object_root() {
        let mut input = json!([1, 2, 3]);
        assert!(matches!(insert_quux(&mut input), Err(Error::Path { .. })));
    }
}
