//! Lead scoring: classification tables, the composing engine, insight rules, and the
//! service/router pair that exposes them.

pub mod batch;
pub mod company;
pub mod criteria;
pub mod domain;
pub mod engine;
pub mod insights;
pub mod job;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{AnalyzeLeadRequest, BatchAnalyzeRequest, BatchEntryResult, BatchOutcome};
pub use company::analyze_company;
pub use criteria::{CompanyTier, ScoringCriteria};
pub use domain::{
    CompanyAnalysis, CompanyInput, CompanyTierKind, CompositeScore, JobAnalysis, JobInput,
    JobLevel, LeadAnalysis, Priority,
};
pub use engine::LeadScoringEngine;
pub use insights::{generate_insights, InsightRule, DEFAULT_INSIGHT_RULES};
pub use job::analyze_job_title;
pub use router::scoring_router;
pub use service::{HealthStatus, LeadScoringService, ScoringServiceError};
