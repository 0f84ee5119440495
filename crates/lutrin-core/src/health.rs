use axum::Json;
use axum::http::StatusCode;

/// Handler for `GET /healthz` (liveness probe).
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` (readiness probe; override per service as needed).
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /version`: the service's crate version, for deploy checks.
pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }))
}
