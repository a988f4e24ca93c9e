//! Common error types shared across crates.

use ffx::FfxError;
use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::EncryptionFailure`] → 500
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The value does not fit the configured codec; `code` names the reason.
    #[error("bad request: {message}")]
    BadRequest { code: &'static str, message: String },

    /// The cipher could not process a well-formed value.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest { .. } => 400,
            ServiceError::EncryptionFailure(_) => 500,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable error code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest { code, .. } => *code,
            ServiceError::EncryptionFailure(_) | ServiceError::Internal(_) => "internal_error",
        }
    }
}

impl From<FfxError> for ServiceError {
    fn from(e: FfxError) -> Self {
        match e {
            FfxError::LengthMismatch { .. } | FfxError::NonAlphabetCharacter(_) => {
                ServiceError::BadRequest {
                    code: e.kind(),
                    message: e.to_string(),
                }
            }
            FfxError::EncodingFailure(_) => ServiceError::EncryptionFailure(e.to_string()),
            FfxError::InvalidParameter(_) => ServiceError::Internal(e.to_string()),
        }
    }
}
