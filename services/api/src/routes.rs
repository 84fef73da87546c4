use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::json;
use tracing::{info, warn};
use unri::error::AppError;
use unri::influence::{calculate_score, create_empty_input, MediaInfluenceInput, ScoreReport};

pub(crate) fn influence_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/influence/template", get(template_endpoint))
        .route("/api/v1/influence/score", post(score_endpoint))
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

pub(crate) async fn template_endpoint() -> Json<MediaInfluenceInput> {
    Json(create_empty_input())
}

pub(crate) async fn score_endpoint(
    Json(input): Json<MediaInfluenceInput>,
) -> Result<Json<ScoreReport>, AppError> {
    if let Err(err) = input.validate_submission() {
        warn!(error = %err, "rejected questionnaire");
        return Err(err.into());
    }

    let report = calculate_score(&input);
    info!(
        account = %input.account_name,
        platform = %input.platform,
        total = report.total_score,
        confidence = ?report.confidence,
        "scored questionnaire"
    );

    Ok(Json(report))
}
