//! Extract a create-request body as a flat key/value map, from JSON or form encoding.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form,
};
use serde_json::Value;
use std::collections::HashMap;

/// Request fields keyed by name. Form values arrive as strings; JSON values keep their type.
#[derive(Clone, Debug, Default)]
pub struct Payload(pub HashMap<String, Value>);

fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Body-limit rejections keep their 413; everything else is a plain bad request.
fn rejection(status: StatusCode, text: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(text)
    } else {
        AppError::BadRequest(text)
    }
}

/// An empty (or all-whitespace) body means "no fields", so required-field checks report what is missing.
fn json_fields(bytes: &[u8]) -> Result<HashMap<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(HashMap::new());
    }
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
    body_to_map(value)
}

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase());

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| rejection(e.status(), e.body_text()))?;
                Ok(Payload(
                    fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
                ))
            }
            // Undeclared bodies are read as JSON.
            None => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| rejection(e.status(), e.body_text()))?;
                Ok(Payload(json_fields(&bytes)?))
            }
            Some(ct) if ct.starts_with("application/json") => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| rejection(e.status(), e.body_text()))?;
                Ok(Payload(json_fields(&bytes)?))
            }
            Some(other) => Err(AppError::BadRequest(format!("unsupported content type: {}", other))),
        }
    }
}
