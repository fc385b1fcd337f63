use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::batch::{score_batch, AnalyzeLeadRequest, BatchAnalyzeRequest, BatchOutcome};
use super::criteria::ScoringCriteria;
use super::domain::LeadAnalysis;
use super::engine::LeadScoringEngine;
use crate::config::ScoringLimits;

/// Caller-facing validation failures. The engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("Job and company data are required")]
    MissingLeadData,
    #[error("Leads must be an array")]
    LeadsNotArray,
    #[error("Batch of {found} leads exceeds the limit of {limit}")]
    BatchTooLarge { limit: usize, found: usize },
    #[error("Invalid lead payload: {0}")]
    MalformedLead(#[from] serde_json::Error),
}

impl IntoResponse for ScoringServiceError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

/// Facade validating requests before handing them to the engine.
#[derive(Debug, Clone, Default)]
pub struct LeadScoringService {
    engine: LeadScoringEngine,
    limits: ScoringLimits,
}

impl LeadScoringService {
    pub fn new(engine: LeadScoringEngine, limits: ScoringLimits) -> Self {
        Self { engine, limits }
    }

    pub fn engine(&self) -> &LeadScoringEngine {
        &self.engine
    }

    pub fn analyze_lead(
        &self,
        request: AnalyzeLeadRequest,
    ) -> Result<LeadAnalysis, ScoringServiceError> {
        let (job, company) = request.into_parts()?;
        let analysis = self.engine.analyze(&job, &company);

        debug!(
            total_score = analysis.total_score,
            priority = analysis.priority.label(),
            level = analysis.job_analysis.level.label(),
            tier = analysis.company_analysis.tier.label(),
            "lead scored"
        );

        Ok(analysis)
    }

    pub fn batch_analyze(
        &self,
        request: &BatchAnalyzeRequest,
    ) -> Result<BatchOutcome, ScoringServiceError> {
        let leads = request
            .leads
            .as_array()
            .ok_or(ScoringServiceError::LeadsNotArray)?;

        if leads.len() > self.limits.max_batch_size {
            return Err(ScoringServiceError::BatchTooLarge {
                limit: self.limits.max_batch_size,
                found: leads.len(),
            });
        }

        let outcome = score_batch(&self.engine, leads);
        info!(
            processed = outcome.processed,
            failed = outcome.failed(),
            "lead batch scored"
        );

        Ok(outcome)
    }

    /// Convenience wrapper for callers holding the raw JSON body.
    pub fn batch_analyze_value(
        &self,
        payload: Value,
    ) -> Result<BatchOutcome, ScoringServiceError> {
        let request: BatchAnalyzeRequest = serde_json::from_value(payload)?;
        self.batch_analyze(&request)
    }

    pub fn criteria(&self) -> &'static ScoringCriteria {
        self.engine.criteria()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy",
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
