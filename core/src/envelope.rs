//! The `{ success, data, message? }` wrapper every endpoint answers with.
//!
//! # Design
//! Parsing goes through an untyped `RawEnvelope` first. Failure responses
//! often carry no `data` at all, and a non-2xx body may not be JSON, so the
//! status and `success` flag are checked before `data` is bound to `T`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, FALLBACK_MESSAGE};
use crate::http::HttpResponse;

/// A successful API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn an `HttpResponse` into an `Envelope<T>` or a `RequestFailed` error.
pub fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<Envelope<T>, ApiError> {
    let raw = serde_json::from_str::<RawEnvelope>(&response.body);

    if !response.is_success() {
        let message = raw
            .ok()
            .and_then(|env| env.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        return Err(ApiError::with_status(response.status, message));
    }

    let raw = raw.map_err(|e| {
        ApiError::with_status(response.status, format!("invalid response body: {e}"))
    })?;

    if !raw.success {
        let message = raw
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        return Err(ApiError::with_status(response.status, message));
    }

    let data = serde_json::from_value(raw.data.unwrap_or(Value::Null)).map_err(|e| {
        ApiError::with_status(response.status, format!("unexpected response data: {e}"))
    })?;

    Ok(Envelope {
        success: true,
        data,
        message: raw.message,
    })
}
