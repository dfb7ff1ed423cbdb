//! List envelope unpacking

use serde_json::Value;

/// Items of the array stored under `key`.
///
/// Anything else (missing key, empty array, non-array value, non-object
/// payload) yields an empty list.
pub fn unpack_envelope(data: Value, key: &str) -> Vec<Value> {
    match data {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unpacks_elements() {
        let data = json!({ "elements": [{ "sku": "1" }, { "sku": "2" }], "total": 2 });
        assert_eq!(unpack_envelope(data, "elements"), vec![json!({ "sku": "1" }), json!({ "sku": "2" })]);
    }

    #[test]
    fn test_custom_key() {
        let data = json!({ "data": [1, 2, 3] });
        assert_eq!(unpack_envelope(data, "data").len(), 3);
    }

    #[test]
    fn test_missing_or_invalid_envelope() {
        assert!(unpack_envelope(json!({}), "elements").is_empty());
        assert!(unpack_envelope(json!({ "elements": [] }), "elements").is_empty());
        assert!(unpack_envelope(json!({ "elements": "nope" }), "elements").is_empty());
        assert!(unpack_envelope(Value::Null, "elements").is_empty());
        assert!(unpack_envelope(json!([1, 2]), "elements").is_empty());
    }
}
