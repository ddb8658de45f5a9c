//! HTTP application: routes and handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use factcheck::ai::GroqModel;
use factcheck::{DuckDuckGo, FactChecker, GdeltClient};

/// Concrete pipeline wiring used by the server.
pub type Pipeline = FactChecker<GroqModel, GdeltClient, DuckDuckGo>;

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<Pipeline>,
}

/// Build the application router.
///
/// CORS is permissive: the expected consumer is a browser extension
/// calling from arbitrary page origins.
pub fn build_app(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/factcheck", post(fact_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline })
}

#[derive(Debug, Deserialize)]
struct FactCheckRequest {
    topic: String,
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Fact-check service is running"
    }))
}

async fn fact_check(
    State(state): State<AppState>,
    Json(request): Json<FactCheckRequest>,
) -> impl IntoResponse {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "topic must not be empty" })),
        )
            .into_response();
    }

    info!(chars = topic.len(), "received fact-check request");
    let report = state.pipeline.check(topic).await;
    Json(report).into_response()
}
