//! Response-shape normalization.
//!
//! The backend's list endpoints are not consistent: `/api/{entity}/all`
//! variously returns `{ "<collection>": [...] }`, a bare `[...]`, or
//! `{ "data": [...] }`. Everything funnels through [`normalize_collection`]
//! so the rest of the crate only ever sees a plain array.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Extracts the record array from any of the known list response shapes.
/// Unrecognized shapes normalize to an empty array rather than an error.
#[must_use]
pub fn normalize_collection(body: &Value, collection: &str) -> Vec<Value> {
    if let Some(array) = body.get(collection).and_then(Value::as_array) {
        return array.clone();
    }
    if let Some(array) = body.as_array() {
        return array.clone();
    }
    if let Some(array) = body.get("data").and_then(Value::as_array) {
        return array.clone();
    }
    debug!(collection, "unrecognized list response shape; treating as empty");
    Vec::new()
}

/// Decodes normalized values into records, skipping any that no longer
/// match the expected shape. One malformed record must not sink the list.
#[must_use]
pub fn decode_records<T: DeserializeOwned>(values: Vec<Value>, collection: &str) -> Vec<T> {
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value(value) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(collection, %error, "skipping undecodable record in list response");
            }
        }
    }
    records
}
