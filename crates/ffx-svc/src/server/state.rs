//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use ffx::StringCodec;

/// Application state shared across all request handlers.
///
/// The codec is immutable, so handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// The configured format-preserving codec.
    pub codec: Arc<StringCodec>,
}

impl AppState {
    /// Create a new [`AppState`] around `codec`.
    pub fn new(codec: StringCodec) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }
}
