//! Google API error body wire format

use serde::Deserialize;
use serde_json::Value;

/// `@type` of the detail entry that carries the messaging error code
pub(crate) const FCM_ERROR_TYPE: &str = "type.googleapis.com/google.firebase.fcm.v1.FcmError";

/// Top-level error envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Canonical status token (e.g. `INVALID_ARGUMENT`)
    #[serde(default)]
    pub status: Option<String>,
    /// Kept untyped; a malformed list must not hide `status` and `message`
    #[serde(default)]
    pub details: Value,
}

impl ErrorResponse {
    /// Decode a response body without logging
    pub fn decode(body: &str) -> serde_json::Result<Option<ErrorBody>> {
        serde_json::from_str::<Self>(body).map(|response| response.error)
    }

    /// Parse a response body, returning `None` for anything that is not an error envelope
    pub fn parse(body: &str) -> Option<ErrorBody> {
        match Self::decode(body) {
            Ok(error) => error,
            Err(e) => {
                tracing::debug!(error = %e, "response body is not a JSON error envelope");
                None
            }
        }
    }
}

impl ErrorBody {
    /// Error code token from the first FCM detail entry
    pub fn fcm_error_code(&self) -> Option<&str> {
        self.details
            .as_array()?
            .iter()
            .find(|detail| detail.get("@type").and_then(Value::as_str) == Some(FCM_ERROR_TYPE))
            .and_then(|detail| detail.get("errorCode"))
            .and_then(Value::as_str)
    }
}
