use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::domain::{CompanyInput, JobInput, LeadAnalysis};
use super::engine::LeadScoringEngine;
use super::service::ScoringServiceError;

/// Single lead as it appears on the wire, for both single and batch requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeLeadRequest {
    #[serde(default)]
    pub job: Option<JobInput>,
    #[serde(default)]
    pub company: Option<CompanyInput>,
}

impl AnalyzeLeadRequest {
    pub fn new(job: JobInput, company: CompanyInput) -> Self {
        Self {
            job: Some(job),
            company: Some(company),
        }
    }

    pub(crate) fn into_parts(self) -> Result<(JobInput, CompanyInput), ScoringServiceError> {
        match (self.job, self.company) {
            (Some(job), Some(company)) => Ok((job, company)),
            _ => Err(ScoringServiceError::MissingLeadData),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchAnalyzeRequest {
    #[serde(default)]
    pub leads: Value,
}

/// Per-entry result; exactly one of `analysis` or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntryResult {
    pub id: Value,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<LeadAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntryResult {
    fn scored(id: Value, analysis: LeadAnalysis) -> Self {
        Self {
            id,
            success: true,
            analysis: Some(analysis),
            error: None,
        }
    }

    fn failed(id: Value, error: &ScoringServiceError) -> Self {
        Self {
            id,
            success: false,
            analysis: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub processed: usize,
    pub results: Vec<BatchEntryResult>,
}

impl BatchOutcome {
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|result| !result.success).count()
    }
}

/// Scores each raw entry on its own; a bad entry yields an error result and never
/// stops the rest. Results keep input order and default their id to the index.
pub(crate) fn score_batch(engine: &LeadScoringEngine, leads: &[Value]) -> BatchOutcome {
    let results = leads
        .iter()
        .enumerate()
        .map(|(index, raw)| score_entry(engine, index, raw))
        .collect();

    BatchOutcome {
        processed: leads.len(),
        results,
    }
}

fn score_entry(engine: &LeadScoringEngine, index: usize, raw: &Value) -> BatchEntryResult {
    let id = raw
        .get("id")
        .filter(|id| !id.is_null())
        .cloned()
        .unwrap_or_else(|| Value::from(index));

    let request = match AnalyzeLeadRequest::deserialize(raw) {
        Ok(request) => request,
        Err(err) => {
            let err = ScoringServiceError::from(err);
            warn!(lead_index = index, error = %err, "skipping malformed batch entry");
            return BatchEntryResult::failed(id, &err);
        }
    };

    match request.into_parts() {
        Ok((job, company)) => BatchEntryResult::scored(id, engine.analyze(&job, &company)),
        Err(err) => {
            warn!(lead_index = index, error = %err, "batch entry rejected");
            BatchEntryResult::failed(id, &err)
        }
    }
}
