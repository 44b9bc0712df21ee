//! Response envelope.
//!
//! Every remote call, success or failure, produces one envelope. The caller
//! consumes it exactly once, either extracting the payload or raising the
//! failure as an I/O-class error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{Result, WmtError};

/// Coarse outcome derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    Success,
    Redirect,
    Unauthorized,
    NotFound,
    RateLimited,
    Error,
}

impl ResponseStatus {
    /// Classify an HTTP status code.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            200..=299 => Self::Success,
            300..=399 => Self::Redirect,
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            _ => Self::Error,
        }
    }
}

/// Structured wrapper around one remote call's outcome.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub code: u16,
    pub timestamp: DateTime<Utc>,
    pub payload: Option<Value>,
    pub headers: HashMap<String, String>,
    pub message: Option<String>,
}

impl ApiResponse {
    /// Build an envelope from response parts.
    ///
    /// The error message, when present, is pulled from the API's standard
    /// `{"error": {"message": ...}}` body shape.
    #[must_use]
    pub fn from_parts(code: u16, headers: HashMap<String, String>, payload: Option<Value>) -> Self {
        let status = ResponseStatus::from_code(code);
        let message = if status == ResponseStatus::Success {
            None
        } else {
            extract_error_message(payload.as_ref())
        };
        Self {
            status,
            code,
            timestamp: Utc::now(),
            payload,
            headers,
            message,
        }
    }

    /// Whether the call succeeded.
    ///
    /// Holds iff status is Success and the code is in [200, 300).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success && (200..300).contains(&self.code)
    }

    /// Consume the envelope, yielding the payload or raising the failure.
    ///
    /// # Errors
    ///
    /// An I/O-class API error carrying the HTTP code and the server's
    /// message (or a generic one) when the call did not succeed.
    pub fn into_payload(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.payload.unwrap_or(Value::Null))
        } else {
            Err(WmtError::Api {
                code: Some(self.code),
                message: self
                    .message
                    .unwrap_or_else(|| format!("request failed with status {}", self.code)),
            })
        }
    }
}

fn extract_error_message(payload: Option<&Value>) -> Option<String> {
    payload
        .and_then(|body| body.get("error"))
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_classification() {
        assert_eq!(ResponseStatus::from_code(200), ResponseStatus::Success);
        assert_eq!(ResponseStatus::from_code(204), ResponseStatus::Success);
        assert_eq!(ResponseStatus::from_code(301), ResponseStatus::Redirect);
        assert_eq!(ResponseStatus::from_code(401), ResponseStatus::Unauthorized);
        assert_eq!(ResponseStatus::from_code(403), ResponseStatus::Unauthorized);
        assert_eq!(ResponseStatus::from_code(404), ResponseStatus::NotFound);
        assert_eq!(ResponseStatus::from_code(429), ResponseStatus::RateLimited);
        assert_eq!(ResponseStatus::from_code(500), ResponseStatus::Error);
    }

    #[test]
    fn is_success_requires_success_status_and_2xx() {
        let ok = ApiResponse::from_parts(200, HashMap::new(), Some(json!({})));
        assert!(ok.is_success());

        let no_content = ApiResponse::from_parts(204, HashMap::new(), None);
        assert!(no_content.is_success());

        let not_found = ApiResponse::from_parts(404, HashMap::new(), None);
        assert!(!not_found.is_success());
    }

    #[test]
    fn into_payload_yields_value_on_success() {
        let envelope =
            ApiResponse::from_parts(200, HashMap::new(), Some(json!({"siteEntry": []})));
        let payload = envelope.into_payload().unwrap();
        assert!(payload.get("siteEntry").is_some());
    }

    #[test]
    fn into_payload_yields_null_for_empty_success_body() {
        let envelope = ApiResponse::from_parts(204, HashMap::new(), None);
        assert_eq!(envelope.into_payload().unwrap(), Value::Null);
    }

    #[test]
    fn into_payload_raises_api_error_with_server_message() {
        let body = json!({"error": {"code": 404, "message": "Site not found."}});
        let envelope = ApiResponse::from_parts(404, HashMap::new(), Some(body));
        assert_eq!(envelope.message.as_deref(), Some("Site not found."));

        let err = envelope.into_payload().unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Site not found."));
    }

    #[test]
    fn into_payload_falls_back_to_generic_message() {
        let envelope = ApiResponse::from_parts(500, HashMap::new(), None);
        let err = envelope.into_payload().unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn success_envelope_carries_no_error_message() {
        let body = json!({"error": {"message": "should be ignored"}});
        let envelope = ApiResponse::from_parts(200, HashMap::new(), Some(body));
        assert!(envelope.message.is_none());
    }

    #[test]
    fn headers_are_preserved() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let envelope = ApiResponse::from_parts(200, headers, None);
        assert_eq!(
            envelope.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }
}
