use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

use super::batch::{AnalyzeLeadRequest, BatchAnalyzeRequest};
use super::service::LeadScoringService;

/// Router exposing the scoring engine as JSON endpoints.
pub fn scoring_router(service: Arc<LeadScoringService>) -> Router {
    Router::new()
        .route("/api/analyze-lead", post(analyze_handler))
        .route("/api/batch-analyze", post(batch_handler))
        .route("/api/criteria", get(criteria_handler))
        .route("/api/health", get(health_handler))
        .with_state(service)
}

fn rejection_response(rejection: JsonRejection) -> Response {
    warn!(error = %rejection.body_text(), "rejected unparseable request body");
    let payload = json!({
        "success": false,
        "error": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<LeadScoringService>>,
    payload: Result<Json<AnalyzeLeadRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.analyze_lead(request) {
        Ok(analysis) => {
            let payload = json!({
                "success": true,
                "analysis": analysis,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<LeadScoringService>>,
    payload: Result<Json<BatchAnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.batch_analyze(&request) {
        Ok(outcome) => {
            let payload = json!({
                "success": true,
                "processed": outcome.processed,
                "results": outcome.results,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn criteria_handler(State(service): State<Arc<LeadScoringService>>) -> Response {
    let payload = json!({
        "success": true,
        "criteria": service.criteria(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn health_handler(State(service): State<Arc<LeadScoringService>>) -> Response {
    (StatusCode::OK, Json(service.health())).into_response()
}
