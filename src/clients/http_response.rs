//! HTTP response types for the Ecwid API client.

use std::collections::HashMap;

/// An HTTP response from the Ecwid API.
///
/// Header names are stored lowercase; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `Retry-After` if present.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns `true` when the store is inside a rate-limit lock window.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.code == 429
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the server-provided error message for a failed response.
    ///
    /// Ecwid answers errors either with a JSON object carrying
    /// `errorMessage` (or `error`), or with a plain text body. Falls back to
    /// `fallback` when neither is present.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> String {
        let from_json = ["errorMessage", "error", "message"]
            .iter()
            .find_map(|key| self.body.get(*key).and_then(serde_json::Value::as_str));
        if let Some(message) = from_json {
            return message.to_string();
        }
        if let Some(raw) = self.body.get("raw_body").and_then(serde_json::Value::as_str) {
            if !raw.trim().is_empty() {
                return raw.trim().to_string();
            }
        }
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_status_predicates() {
        let not_found = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!not_found.is_ok());
        assert!(not_found.is_not_found());

        let locked = HttpResponse::new(429, HashMap::new(), json!({}));
        assert!(locked.is_locked());
        assert!(!locked.is_not_found());
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_ignores_garbage() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["soon".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!(response.retry_request_after.is_none());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_error_message_prefers_json_fields() {
        let response = HttpResponse::new(
            403,
            HashMap::new(),
            json!({"errorMessage": "Invalid secure_auth_key"}),
        );
        assert_eq!(response.error_message("Forbidden"), "Invalid secure_auth_key");
    }

    #[test]
    fn test_error_message_uses_raw_body_then_fallback() {
        let response = HttpResponse::new(500, HashMap::new(), json!({"raw_body": " boom "}));
        assert_eq!(response.error_message("Internal Server Error"), "boom");

        let response = HttpResponse::new(400, HashMap::new(), json!({}));
        assert_eq!(response.error_message("Bad Request"), "Bad Request");
    }
}
