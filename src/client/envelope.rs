//! Response envelope unwrapping.
//!
//! The backend is inconsistent about wrapping its payloads: the same kind of
//! list may arrive as a bare array, as `{ "data": [...] }`, or as
//! `{ "data": { "data": [...] } }`, and detail endpoints do the same with
//! single objects. The functions here reduce every known shape to the bare
//! payload before it is decoded.

use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Keys that may hold the actual list inside an object envelope, in lookup order.
const LIST_KEYS: [&str; 5] = ["data", "content", "items", "products", "categories"];

/// Keys that may hold the actual record inside an object envelope, in lookup order.
const RECORD_KEYS: [&str; 2] = ["data", "category"];

/// Extracts the list of records from a response, whatever its envelope.
///
/// Anything that does not contain a list (null, scalars, objects without a
/// known list key) yields an empty list instead of an error.
#[must_use]
pub fn unwrap_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in LIST_KEYS {
                if let Some(inner) = map.remove(key) {
                    if matches!(inner, Value::Array(_) | Value::Object(_)) {
                        return unwrap_list(inner);
                    }
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Extracts a single record from a response, whatever its envelope.
///
/// `{data: {...}}`, `{data: {data: {...}}}` and `{data: {category: {...}}}`
/// all reduce to the innermost object. An object carrying an `id` is already
/// the record (its embedded `category` is a relation, not a wrapper) and is
/// returned as is.
#[must_use]
pub fn unwrap_record(value: Value) -> Value {
    match value {
        Value::Object(map) if map.contains_key("id") => Value::Object(map),
        Value::Object(mut map) => {
            for key in RECORD_KEYS {
                if matches!(map.get(key), Some(Value::Object(_))) {
                    if let Some(inner) = map.remove(key) {
                        return unwrap_record(inner);
                    }
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Unwraps and decodes a list response.
///
/// # Errors
/// Returns an error if an item does not match the record type.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    unwrap_list(value)
        .into_iter()
        .map(|item| serde_json::from_value::<T>(item).map_err(Error::from))
        .collect()
}

/// Unwraps and decodes a single-record response.
///
/// # Errors
/// Returns an error if the payload does not match the record type.
pub fn decode_record<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value::<T>(unwrap_record(value)).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_list_envelopes_yield_same_records() {
        let records = json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]);

        let bare = unwrap_list(records.clone());
        let wrapped = unwrap_list(json!({ "data": records.clone() }));
        let double = unwrap_list(json!({ "data": { "data": records.clone() } }));

        assert_eq!(bare.len(), 2);
        assert_eq!(bare, wrapped);
        assert_eq!(bare, double);
    }

    #[test]
    fn test_alternative_list_keys() {
        let records = json!([{"id": 7}]);
        assert_eq!(unwrap_list(json!({ "content": records.clone() })).len(), 1);
        assert_eq!(unwrap_list(json!({ "data": { "items": records.clone() } })).len(), 1);
        assert_eq!(unwrap_list(json!({ "products": records })).len(), 1);
    }

    #[test]
    fn test_unknown_shapes_yield_empty_list() {
        assert!(unwrap_list(Value::Null).is_empty());
        assert!(unwrap_list(json!("oops")).is_empty());
        assert!(unwrap_list(json!({ "message": "ok" })).is_empty());
        assert!(unwrap_list(json!({ "data": null })).is_empty());
    }

    #[test]
    fn test_record_envelopes() {
        let record = json!({"id": 3, "name": "Áo"});
        assert_eq!(unwrap_record(record.clone()), record);
        assert_eq!(unwrap_record(json!({ "data": record.clone() })), record);
        assert_eq!(unwrap_record(json!({ "data": { "data": record.clone() } })), record);
        assert_eq!(unwrap_record(json!({ "data": { "category": record.clone() } })), record);
    }

    #[test]
    fn test_record_with_embedded_category_is_not_unwrapped() {
        let product = json!({"id": 9, "name": "Giày", "category": {"id": 2, "name": "Dép"}});
        assert_eq!(unwrap_record(json!({ "data": product.clone() })), product);
    }

    #[test]
    fn test_record_with_scalar_data_field_is_kept() {
        let record = json!({"id": 3, "data": "raw"});
        assert_eq!(unwrap_record(record.clone()), record);
    }
}
