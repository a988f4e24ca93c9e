//! Request and response types for the HTTP API.
//!
//! Plaintext and ciphertext travel in the same `value` field; both have the
//! codec's fixed length and alphabet.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Encrypt / decrypt endpoints
// ---------------------------------------------------------------------------

/// Request body for `POST /encrypt` and `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Value to transform; must match the configured length and alphabet.
    pub value: String,
}

/// Successful response body for `POST /encrypt` and `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    /// Transformed value, same length and alphabet as the input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"length_mismatch"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; always `"ok"` once the codec is built.
    pub status: String,
    /// Alphabet size of the configured codec.
    pub radix: usize,
    /// Required value length in symbols.
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_request_from_json() {
        let req: TransformRequest = serde_json::from_str(r#"{"value":"4111111111111111"}"#).unwrap();
        assert_eq!(req.value, "4111111111111111");
    }

    #[test]
    fn transform_request_requires_value() {
        assert!(serde_json::from_str::<TransformRequest>("{}").is_err());
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("length_mismatch", "expected 16, got 4");
        assert_eq!(e.code, "length_mismatch");
        assert!(e.message.contains("expected 16"));
    }

    #[test]
    fn health_response_serde() {
        let h = HealthResponse {
            status: "ok".into(),
            radix: 10,
            length: 16,
        };
        let json = serde_json::to_string(&h).unwrap();
        let decoded: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.length, 16);
        assert_eq!(decoded.radix, 10);
    }
}
