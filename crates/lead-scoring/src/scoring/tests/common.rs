use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::config::ScoringLimits;
use crate::scoring::{
    scoring_router, CompanyInput, JobInput, LeadScoringEngine, LeadScoringService,
};

pub(super) fn engine() -> LeadScoringEngine {
    LeadScoringEngine::standard()
}

pub(super) fn service() -> LeadScoringService {
    LeadScoringService::new(engine(), ScoringLimits::default())
}

pub(super) fn limited_service(max_batch_size: usize) -> LeadScoringService {
    LeadScoringService::new(engine(), ScoringLimits { max_batch_size })
}

pub(super) fn router() -> Router {
    scoring_router(Arc::new(service()))
}

pub(super) fn job(title: &str) -> JobInput {
    JobInput::titled(title)
}

pub(super) fn company(employees: i64, industry: Option<&str>) -> CompanyInput {
    let company = CompanyInput::new(employees);
    match industry {
        Some(industry) => company.with_industry(industry),
        None => company,
    }
}

pub(super) fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
