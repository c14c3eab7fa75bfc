use serde_json::Value;

use crate::{ErrorCause, ErrorKind, NormalizedError};

/// Message used when a failed envelope carries neither `error` nor `detail`.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request Failed";

/// The status fields of the backend's `{ success, data?, error?, detail? }`
/// wrapper, read leniently. The payload itself is passed through untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEnvelope {
    pub success: Option<bool>,
    pub error: Option<String>,
    pub detail: Option<String>,
}

impl ResponseEnvelope {
    /// Reads envelope fields from a JSON body. Non-object bodies have no fields.
    pub fn from_value(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::default();
        };
        Self {
            success: object.get("success").and_then(Value::as_bool),
            error: object.get("error").and_then(text_field),
            detail: object.get("detail").and_then(text_field),
        }
    }

    /// True only when `success` is literally `false`.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// `error`, else `detail`, else [`DEFAULT_FAILURE_MESSAGE`].
    pub fn failure_message(&self) -> String {
        self.error
            .as_deref()
            .or(self.detail.as_deref())
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string()
    }
}

fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Unwraps a 2xx body. A `success: false` envelope becomes an error carrying
/// the backend's message; anything else is returned whole.
pub fn normalize(body: Value) -> Result<Value, NormalizedError> {
    let envelope = ResponseEnvelope::from_value(&body);
    if !envelope.is_failure() {
        return Ok(body);
    }

    Err(NormalizedError {
        message: envelope.failure_message(),
        kind: ErrorKind::Unknown,
        cause: ErrorCause::Envelope {
            error: envelope.error,
            detail: envelope.detail,
            body,
        },
    })
}
