//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{ErrorResponse, HealthResponse, TransformRequest, TransformResponse};
use common::ServiceError;
use ffx::FfxError;
use tracing::{debug, warn};

use super::state::AppState;

/// `POST /encrypt` - encrypt `value` with the configured codec.
pub async fn encrypt(
    State(state): State<AppState>,
    Json(req): Json<TransformRequest>,
) -> Response {
    respond("encrypt", state.codec.encrypt(&req.value))
}

/// `POST /decrypt` - decrypt `value` with the configured codec.
pub async fn decrypt(
    State(state): State<AppState>,
    Json(req): Json<TransformRequest>,
) -> Response {
    respond("decrypt", state.codec.decrypt(&req.value))
}

/// `GET /health` - liveness check reporting the codec shape.
pub async fn health(State(state): State<AppState>) -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        radix: state.codec.radix(),
        length: state.codec.length(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

fn respond(op: &'static str, result: Result<String, FfxError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(TransformResponse { value })).into_response(),
        Err(e) => error_response(op, e.into()),
    }
}

/// Map a [`ServiceError`] to its status and JSON body.
///
/// Only the error code is logged; messages can echo an input symbol.
fn error_response(op: &'static str, err: ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(op, code = err.code(), "transform failed");
        let body = ErrorResponse::new(err.code(), format!("{op} failed"));
        return (status, Json(body)).into_response();
    }
    debug!(op, code = err.code(), "transform rejected");
    (status, Json(ErrorResponse::new(err.code(), err.to_string()))).into_response()
}
