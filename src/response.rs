//! Response envelope helpers. Collections and single items are wrapped under a
//! resource key (`{"movies": [...]}`, `{"movie": {...}}`); created records are returned flat.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::collections::BTreeMap;

pub type Keyed<T> = BTreeMap<&'static str, T>;

/// `200 OK` with `{ key: data }`.
pub fn success_keyed<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Keyed<T>>) {
    (StatusCode::OK, Json(BTreeMap::from([(key, data)])))
}

/// `200 OK` with a list under `key`.
pub fn success_many<T: Serialize>(key: &'static str, data: Vec<T>) -> (StatusCode, Json<Keyed<Vec<T>>>) {
    success_keyed(key, data)
}

/// Creation also answers `200 OK`; the record is not wrapped.
pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Same shape as `AppError` responses: `details` is left out when there are none.
pub fn error_body(code: &str, message: String, details: Option<serde_json::Value>) -> serde_json::Value {
    let mut error = serde_json::json!({
        "code": code,
        "message": message,
    });
    if let (Some(details), Some(obj)) = (details, error.as_object_mut()) {
        obj.insert("details".into(), details);
    }
    serde_json::json!({ "error": error })
}
