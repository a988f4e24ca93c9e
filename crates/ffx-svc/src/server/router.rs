//! Axum router construction.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/encrypt", post(handlers::encrypt))
        .route("/decrypt", post(handlers::decrypt))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use ffx::{IntegerCodec, StringCodec};
    use tower::ServiceExt;

    fn app() -> Router {
        build(AppState::new(StringCodec::new("secret-key", ffx::DECIMAL, 4).unwrap()))
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let req = Request::builder()
            .uri("/unknown")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn health_route_exists() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn encrypt_agrees_with_integer_codec() {
        let expected = IntegerCodec::new("secret-key", 4).unwrap().encrypt(1234).unwrap();
        let req = Request::builder()
            .method("POST")
            .uri("/encrypt")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"value":"1234"}"#))
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["value"], format!("{expected:04}"));
    }

    #[tokio::test]
    async fn get_on_encrypt_is_rejected() {
        let req = Request::builder()
            .uri("/encrypt")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 405);
    }
}
