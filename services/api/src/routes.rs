use crate::infra::AppState;
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use interview_scoring::scoring::{scoring_router, ScoringEngine};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub(crate) fn with_scoring_routes(engine: Arc<ScoringEngine>) -> axum::Router {
    scoring_router(engine)
        .route("/", axum::routing::get(banner))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(dashboard_cors())
}

/// The dashboard is served from its own origin.
fn dashboard_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}

pub(crate) async fn banner() -> Json<serde_json::Value> {
    Json(json!({
        "status": "System Ready",
        "message": "Interview Engine API is running",
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
