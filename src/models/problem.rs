//! Problem model helpers
//!
//! Problem metadata is free-form JSON. These helpers pull out the handful of
//! fields the service itself relies on.

use serde_json::{Map, Value};

use crate::constants::meta_keys;

/// Author list of a problem's metadata, empty when missing or not a list
pub fn authors(meta: &Value) -> Vec<Value> {
    meta.get(meta_keys::AUTHORS)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Listing entry: the metadata object with its `id` filled in
///
/// Non-object metadata is replaced by an object holding just the id.
pub fn summary_with_id(meta: Value, id: &str) -> Value {
    let mut object = match meta {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    object.insert(meta_keys::ID.to_string(), Value::String(id.to_string()));
    Value::Object(object)
}

/// Id of a listing entry
pub fn summary_id(summary: &Value) -> &str {
    summary
        .get(meta_keys::ID)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// Entries of an `index.json` document
///
/// Accepts both shapes found in the corpus: an object keyed by id, or an
/// array of objects carrying their own `id`. Entries without an id are dropped.
pub fn summaries_from_index(index: Value) -> Vec<Value> {
    match index {
        Value::Object(map) => map
            .into_iter()
            .map(|(id, details)| summary_with_id(details, &id))
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .filter(|item| item.get(meta_keys::ID).and_then(Value::as_str).is_some())
            .collect(),
        _ => Vec::new(),
    }
}
